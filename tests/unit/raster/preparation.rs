//! Tests for source and tile preparation

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};
    use pixelmosaic::MosaicError;
    use pixelmosaic::raster::preparation::{fit_to_cell, resize_by_factor, to_grayscale};

    // Tests rescaled dimensions are floored
    // Verified by rounding dimensions
    #[test]
    fn test_resize_by_factor_floors() {
        let raster = RgbaImage::new(7, 5);

        assert_eq!(resize_by_factor(&raster, 0.5).unwrap().dimensions(), (3, 2));
        assert_eq!(resize_by_factor(&raster, 2.0).unwrap().dimensions(), (14, 10));
        assert_eq!(resize_by_factor(&raster, 1.0).unwrap(), raster);
    }

    // Tests bad factors and vanishing results are rejected
    // Verified by clamping dimensions to one
    #[test]
    fn test_resize_by_factor_errors() {
        let raster = RgbaImage::new(2, 2);

        assert!(matches!(
            resize_by_factor(&raster, 0.25),
            Err(MosaicError::MalformedRaster { .. })
        ));
        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                resize_by_factor(&raster, factor),
                Err(MosaicError::InvalidParameter { .. })
            ));
        }
    }

    // Tests oversized results are rejected before any pixel is allocated
    // Verified by resizing to saturated dimensions
    #[test]
    fn test_resize_by_factor_too_large() {
        let raster = RgbaImage::new(1, 1);

        assert!(matches!(
            resize_by_factor(&raster, 1e10),
            Err(MosaicError::InvalidParameter {
                parameter: "scale",
                ..
            })
        ));
        assert!(resize_by_factor(&RgbaImage::new(4, 2), 25_001.0).is_err());
        assert_eq!(
            resize_by_factor(&raster, 100.0).unwrap().dimensions(),
            (100, 100)
        );
    }

    // Tests grayscale conversion of color images
    // Verified by keeping only the red channel
    #[test]
    fn test_to_grayscale() {
        let white = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([255; 4])));
        let gray = to_grayscale(&white);

        assert_eq!(gray.dimensions(), (2, 2));
        assert_eq!(*gray.get_pixel(1, 1), Luma([255]));
    }

    // Tests tiles scale to the cell and are centered
    // Verified by stretching tiles to fill the cell
    #[test]
    fn test_fit_to_cell() {
        let wide = GrayImage::new(2, 1);
        let (fitted, offset) = fit_to_cell(&wide, 4).unwrap();
        assert_eq!(fitted.dimensions(), (4, 2));
        assert_eq!(offset, (0, 1));

        let dot = GrayImage::from_pixel(1, 1, Luma([0]));
        let (fitted, offset) = fit_to_cell(&dot, 3).unwrap();
        assert_eq!(fitted.dimensions(), (3, 3));
        assert_eq!(offset, (0, 0));

        let tall = GrayImage::new(10, 40);
        let (fitted, offset) = fit_to_cell(&tall, 8).unwrap();
        assert_eq!(fitted.dimensions(), (2, 8));
        assert_eq!(offset, (3, 0));
    }

    // Tests a tile already matching the cell is unchanged
    // Verified by resampling every tile
    #[test]
    fn test_fit_to_cell_exact() {
        let tile = GrayImage::from_fn(5, 5, |x, y| Luma([(x * 50 + y) as u8]));
        let (fitted, offset) = fit_to_cell(&tile, 5).unwrap();

        assert_eq!(fitted, tile);
        assert_eq!(offset, (0, 0));
    }

    // Tests invalid tiles and cells are rejected
    // Verified by dividing by zero
    #[test]
    fn test_fit_to_cell_errors() {
        assert!(fit_to_cell(&GrayImage::new(0, 3), 4).is_err());
        assert!(matches!(
            fit_to_cell(&GrayImage::new(3, 3), 0),
            Err(MosaicError::InvalidParameter { .. })
        ));
    }
}

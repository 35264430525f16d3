//! Tests for intensity image construction, validation and 8-bit conversion

#[cfg(test)]
mod tests {
    use biaspanels::{ErrorKind, IntensityImage};
    use image::{GrayImage, Luma};
    use ndarray::{Array2, array};

    // Tests shape accessors follow (height, width) order
    // Verified by swapping rows and columns in dim
    #[test]
    fn test_dimensions_are_height_then_width() {
        let Ok(image) = IntensityImage::filled(3, 7, 0.25) else {
            unreachable!("valid fill should succeed");
        };

        assert_eq!(image.dim(), (3, 7));
        assert_eq!(image.height(), 3);
        assert_eq!(image.width(), 7);
        assert_eq!(image.get(2, 6), Some(0.25));
        assert_eq!(image.get(3, 0), None);
    }

    // Tests zero-sized arrays are rejected as precondition errors
    // Verified by removing the empty-shape check
    #[test]
    fn test_zero_size_rejected() {
        let result = IntensityImage::from_array("empty", Array2::zeros((0, 4)));

        let Err(error) = result else {
            unreachable!("empty image must be rejected");
        };
        assert_eq!(error.kind(), ErrorKind::Precondition);
        assert!(error.to_string().contains("empty"));
    }

    // Tests out-of-range and non-finite values are rejected with their position
    // Verified by accepting any finite value
    #[test]
    fn test_out_of_range_rejected() {
        let high = IntensityImage::from_array("high", array![[0.0, 1.5]]);
        let negative = IntensityImage::from_array("negative", array![[-0.1, 0.5]]);
        let nan = IntensityImage::from_array("nan", array![[f64::NAN]]);

        assert!(high.is_err());
        assert!(negative.is_err());
        assert!(nan.is_err());
        if let Err(error) = high {
            assert!(error.to_string().contains("(0, 1)"));
        }
    }

    // Tests the inclusive range endpoints are accepted
    // Verified by using exclusive comparisons
    #[test]
    fn test_endpoints_accepted() {
        assert!(IntensityImage::from_array("ends", array![[0.0, 1.0]]).is_ok());
    }

    // Tests 8-bit conversion divides by 255
    // Verified by dividing by 256
    #[test]
    fn test_from_gray8_normalizes() {
        let mut gray = GrayImage::from_pixel(2, 1, Luma([255]));
        gray.put_pixel(0, 0, Luma([51]));

        let Ok(image) = IntensityImage::from_gray8("gray", &gray) else {
            unreachable!("gray image should convert");
        };

        assert_eq!(image.dim(), (1, 2));
        assert_eq!(image.get(0, 0), Some(51.0 / 255.0));
        assert_eq!(image.get(0, 1), Some(1.0));
    }

    // Tests 8-bit output truncates scaled values
    // Verified by rounding instead of truncating
    #[test]
    fn test_to_gray8_truncates() {
        let Ok(image) = IntensityImage::from_array("ramp", array![[0.0, 0.999, 1.0]]) else {
            unreachable!("ramp should be valid");
        };

        let gray = image.to_gray8();

        assert_eq!(gray.dimensions(), (3, 1));
        assert_eq!(gray.get_pixel(0, 0).0[0], 0);
        assert_eq!(gray.get_pixel(1, 0).0[0], 254);
        assert_eq!(gray.get_pixel(2, 0).0[0], 255);
    }

    // Tests 8-bit values survive a round trip exactly
    // Verified by offsetting the conversion
    #[test]
    fn test_gray8_round_trip_is_stable() {
        let gray = GrayImage::from_fn(16, 16, |x, y| Luma([((x * 16 + y) % 256) as u8]));

        let Ok(image) = IntensityImage::from_gray8("pattern", &gray) else {
            unreachable!("pattern should convert");
        };

        assert_eq!(image.to_gray8(), gray);
    }

    // Tests display output rounds to the nearest level
    // Verified by truncating display levels
    #[test]
    fn test_display_gray8_rounds() {
        let Ok(image) = IntensityImage::from_array("mid", array![[0.5, 0.999, 0.0, 1.0]]) else {
            unreachable!("values lie in [0, 1]");
        };

        let gray = image.to_display_gray8();

        assert_eq!(gray.get_pixel(0, 0).0[0], 128);
        assert_eq!(gray.get_pixel(1, 0).0[0], 255);
        assert_eq!(gray.get_pixel(2, 0).0[0], 0);
        assert_eq!(gray.get_pixel(3, 0).0[0], 255);
        assert_eq!(image.to_gray8().get_pixel(0, 0).0[0], 127);
    }
}

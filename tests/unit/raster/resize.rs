//! Tests for resize-to-match reconciliation

#[cfg(test)]
mod tests {
    use biaspanels::raster::resize::reconcile;
    use biaspanels::{ErrorKind, IntensityImage};
    use ndarray::Array2;

    fn gradient(height: usize, width: usize) -> IntensityImage {
        let data = Array2::from_shape_fn((height, width), |(row, col)| {
            ((row + col) % 11) as f64 / 10.0
        });
        let Ok(image) = IntensityImage::from_array("gradient", data) else {
            unreachable!("gradient values lie in [0, 1]");
        };
        image
    }

    // Tests a matching image is returned bit-identical
    // Verified by always taking the resize path
    #[test]
    fn test_matching_shape_is_noop() {
        let image = gradient(12, 9);
        let expected = image.clone();

        let Ok(result) = reconcile(image, (12, 9), "gradient") else {
            unreachable!("matching shape cannot fail");
        };

        assert_eq!(result, expected);
    }

    // Tests enlarging and shrinking both land on the exact target shape
    // Verified by swapping width and height in the resize call
    #[test]
    fn test_mismatched_shape_resized_exactly() {
        let Ok(enlarged) = reconcile(gradient(10, 11), (40, 25), "small") else {
            unreachable!("enlarging should succeed");
        };
        let Ok(shrunk) = reconcile(gradient(64, 48), (16, 30), "large") else {
            unreachable!("shrinking should succeed");
        };

        assert_eq!(enlarged.dim(), (40, 25));
        assert_eq!(shrunk.dim(), (16, 30));
    }

    // Tests resized values stay within [0, 1]
    // Verified by skipping the 8-bit rescale
    #[test]
    fn test_resized_values_in_range() {
        let Ok(result) = reconcile(gradient(7, 13), (20, 20), "gradient") else {
            unreachable!("resize should succeed");
        };

        assert!(result.data().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    // Tests a uniform image keeps its level up to quantization error
    // Verified by dropping filter weight normalization
    #[test]
    fn test_uniform_image_preserved() {
        let Ok(gray) = IntensityImage::filled(8, 8, 0.5) else {
            unreachable!("valid fill");
        };
        let Ok(white) = IntensityImage::filled(8, 8, 1.0) else {
            unreachable!("valid fill");
        };

        let Ok(gray_result) = reconcile(gray, (13, 5), "gray") else {
            unreachable!("resize should succeed");
        };
        let Ok(white_result) = reconcile(white, (3, 17), "white") else {
            unreachable!("resize should succeed");
        };

        assert!(gray_result.data().iter().all(|v| (v - 0.5).abs() <= 2.0 / 255.0));
        assert!(white_result.data().iter().all(|v| (v - 1.0).abs() <= 1.0 / 255.0));
    }

    // Tests an empty target shape is a precondition error
    // Verified by removing the target validation
    #[test]
    fn test_zero_target_rejected() {
        let result = reconcile(gradient(4, 4), (0, 4), "gradient");

        let Err(error) = result else {
            unreachable!("empty target must be rejected");
        };
        assert_eq!(error.kind(), ErrorKind::Precondition);
    }
}

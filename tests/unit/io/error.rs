//! Tests for error classification, source chaining and message formatting

#[cfg(test)]
mod tests {
    use biaspanels::io::error::{computation_error, invalid_parameter, shape_mismatch};
    use biaspanels::{ErrorKind, PanelError};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PanelError::FileSystem {
            path: "/tmp/out.png".into(),
            operation: "replace output",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("replace output"));
    }

    // Tests shape mismatches name both shapes
    // Verified by omitting the actual shape from the message
    #[test]
    fn test_shape_mismatch_message() {
        let error = shape_mismatch("mask application", (10, 10), (10, 11));

        let message = error.to_string();
        assert!(message.contains("mask application"));
        assert!(message.contains("10x10"));
        assert!(message.contains("10x11"));
        assert_eq!(error.kind(), ErrorKind::Precondition);
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("threshold", &1.5, &"must lie in [0, 1]");

        let message = error.to_string();
        assert!(message.contains("threshold"));
        assert!(message.contains("1.5"));
        assert!(message.contains("[0, 1]"));
    }

    // Tests font failures are classified as unavailable resources
    // Verified by classifying font errors as I/O
    #[test]
    fn test_font_unavailable_kind() {
        let error = PanelError::FontUnavailable {
            path: "fonts/missing.ttf".into(),
            reason: "file not found".to_owned(),
        };

        assert_eq!(error.kind(), ErrorKind::ResourceUnavailable);
        assert!(error.to_string().contains("missing.ttf"));
    }

    // Tests invalid image data reports the image name
    // Verified by dropping the name from the message
    #[test]
    fn test_invalid_image_data_message() {
        let error = PanelError::InvalidImageData {
            name: "mask".to_owned(),
            reason: "value 2 at (0, 0) outside [0, 1]".to_owned(),
        };

        assert!(error.to_string().contains("'mask'"));
        assert_eq!(error.kind(), ErrorKind::Precondition);
    }

    // Tests an unwritable output location is an unavailable resource
    // Verified by classifying file system errors as I/O
    #[test]
    fn test_file_system_is_resource_unavailable() {
        let error = PanelError::FileSystem {
            path: "/read-only/out.png".into(),
            operation: "create temporary file",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(error.kind(), ErrorKind::ResourceUnavailable);
    }

    // Tests internal buffer failures have their own kind
    // Verified by classifying computation errors as I/O
    #[test]
    fn test_computation_is_internal() {
        let error = computation_error("gray conversion", &"buffer too short");

        assert_eq!(error.kind(), ErrorKind::Internal);
        assert!(error.to_string().contains("gray conversion"));
        assert!(error.source().is_none());
    }
}

mod context;
mod types;

pub use context::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_common::LumenError;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_maps_into_lumen_error() {
        let err: LumenError = RendererError::InvalidArgument("fidelity = 1".into()).into();
        assert!(matches!(err, LumenError::InvalidArgument(_)));

        let err: LumenError = RendererError::ResourceUnavailable("Gas.png".into()).into();
        assert!(matches!(err, LumenError::ResourceUnavailable(_)));

        let err: LumenError = RendererError::AdapterNotFound.into();
        assert!(matches!(err, LumenError::Renderer(_)));
    }

    #[test]
    fn physical_size_aspect() {
        let a = PhysicalSize {
            width: 800,
            height: 400,
        };
        let b = a;
        assert_eq!(a, b);
        assert!((a.aspect() - 2.0).abs() < f32::EPSILON);
        assert!((PhysicalSize { width: 5, height: 0 }.aspect() - 1.0).abs() < f32::EPSILON);
    }
}

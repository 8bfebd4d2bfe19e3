//! Fixed-function state baked into pipeline variants.
//!
//! wgpu has no global cull/fill/stencil switches, so each program prebuilds
//! one pipeline per [`PipelineKey`] and draws pick the variant matching the
//! current toggles.

/// Rasterised polygon fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolygonFill {
    #[default]
    Fill,
    /// Edges only. Needs `Features::POLYGON_MODE_LINE`.
    Line,
}

/// Stencil behaviour of a draw. The reference value is set on the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StencilMode {
    /// Stencil untouched.
    #[default]
    Disabled,
    /// Always passes and writes the reference where depth passes.
    Write,
    /// Passes only where the stencil differs from the reference; no writes.
    Outline,
}

/// Reference value written by [`StencilMode::Write`].
pub const STENCIL_REFERENCE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PipelineKey {
    /// Cull back faces.
    pub cull: bool,
    pub polygon: PolygonFill,
    pub stencil: StencilMode,
}

impl PipelineKey {
    /// Every combination, in a stable order.
    pub fn all() -> impl Iterator<Item = PipelineKey> {
        [false, true].into_iter().flat_map(|cull| {
            [PolygonFill::Fill, PolygonFill::Line]
                .into_iter()
                .flat_map(move |polygon| {
                    [StencilMode::Disabled, StencilMode::Write, StencilMode::Outline]
                        .into_iter()
                        .map(move |stencil| PipelineKey {
                            cull,
                            polygon,
                            stencil,
                        })
                })
        })
    }

    /// Same key with a filled polygon mode.
    pub fn filled(self) -> Self {
        Self {
            polygon: PolygonFill::Fill,
            ..self
        }
    }

    pub fn cull_mode(&self) -> Option<wgpu::Face> {
        self.cull.then_some(wgpu::Face::Back)
    }

    pub fn polygon_mode(&self) -> wgpu::PolygonMode {
        match self.polygon {
            PolygonFill::Fill => wgpu::PolygonMode::Fill,
            PolygonFill::Line => wgpu::PolygonMode::Line,
        }
    }

    pub fn stencil_state(&self) -> wgpu::StencilState {
        let (compare, pass_op, write_mask) = match self.stencil {
            StencilMode::Disabled => (
                wgpu::CompareFunction::Always,
                wgpu::StencilOperation::Keep,
                0x00,
            ),
            StencilMode::Write => (
                wgpu::CompareFunction::Always,
                wgpu::StencilOperation::Replace,
                0xFF,
            ),
            StencilMode::Outline => (
                wgpu::CompareFunction::NotEqual,
                wgpu::StencilOperation::Keep,
                0x00,
            ),
        };
        let face = wgpu::StencilFaceState {
            compare,
            fail_op: wgpu::StencilOperation::Keep,
            depth_fail_op: wgpu::StencilOperation::Keep,
            pass_op,
        };
        wgpu::StencilState {
            front: face,
            back: face,
            read_mask: 0xFF,
            write_mask,
        }
    }

    pub fn label(&self) -> String {
        format!(
            "{}{:?}/{:?}",
            if self.cull { "cull/" } else { "" },
            self.polygon,
            self.stencil
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_keys_are_distinct() {
        let keys: Vec<_> = PipelineKey::all().collect();
        assert_eq!(keys.len(), 12);
        let unique: HashSet<_> = keys.iter().copied().collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn default_key_is_plain() {
        let key = PipelineKey::default();
        assert!(key.cull_mode().is_none());
        assert_eq!(key.polygon_mode(), wgpu::PolygonMode::Fill);
        assert_eq!(key.stencil_state().write_mask, 0);
        assert!(!key.stencil_state().is_enabled());
    }

    #[test]
    fn stencil_write_replaces_everywhere() {
        let key = PipelineKey {
            stencil: StencilMode::Write,
            ..PipelineKey::default()
        };
        let state = key.stencil_state();
        assert_eq!(state.front.compare, wgpu::CompareFunction::Always);
        assert_eq!(state.front.pass_op, wgpu::StencilOperation::Replace);
        assert_eq!(state.front.depth_fail_op, wgpu::StencilOperation::Keep);
        assert_eq!(state.write_mask, 0xFF);
    }

    #[test]
    fn stencil_outline_tests_without_writing() {
        let key = PipelineKey {
            stencil: StencilMode::Outline,
            ..PipelineKey::default()
        };
        let state = key.stencil_state();
        assert_eq!(state.front.compare, wgpu::CompareFunction::NotEqual);
        assert_eq!(state.back.compare, wgpu::CompareFunction::NotEqual);
        assert_eq!(state.write_mask, 0);
        assert_eq!(state.read_mask, 0xFF);
    }

    #[test]
    fn cull_and_line() {
        let key = PipelineKey {
            cull: true,
            polygon: PolygonFill::Line,
            stencil: StencilMode::Disabled,
        };
        assert_eq!(key.cull_mode(), Some(wgpu::Face::Back));
        assert_eq!(key.polygon_mode(), wgpu::PolygonMode::Line);
        assert_eq!(key.filled().polygon, PolygonFill::Fill);
        assert!(key.filled().cull);
    }
}

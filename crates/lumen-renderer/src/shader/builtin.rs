//! Embedded WGSL programs and their uniform layouts.

use crate::lighting::POINT_LIGHT_COUNT;
use crate::uniforms::{StructFields, UniformKind, UniformLayout, UniformLayoutBuilder};

use super::program::{DepthMode, ProgramDescriptor, TextureSlot};

const COMMON: &str = include_str!("../shaders/common.wgsl");
const OBJECT_VERT: &str = include_str!("../shaders/object.vert.wgsl");
const PHONG_FRAG: &str = include_str!("../shaders/phong.frag.wgsl");
const DIRECTIONAL_FRAG: &str = include_str!("../shaders/directional.frag.wgsl");
const REFLECTION_FRAG: &str = include_str!("../shaders/reflection.frag.wgsl");
const FIXED_COLOR_FRAG: &str = include_str!("../shaders/fixed_color.frag.wgsl");
const SKYBOX_VERT: &str = include_str!("../shaders/skybox.vert.wgsl");
const SKYBOX_FRAG: &str = include_str!("../shaders/skybox.frag.wgsl");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinProgram {
    /// Textured, lit by the directional light and both point lights.
    Phong,
    /// Textured, lit by the directional light only.
    Directional,
    /// Mirror surface sampling a cubemap along the reflected view ray.
    Reflection,
    /// Solid `ObjectColor`.
    FixedColor,
    Skybox,
}

impl BuiltinProgram {
    pub const ALL: [BuiltinProgram; 5] = [
        BuiltinProgram::Phong,
        BuiltinProgram::Directional,
        BuiltinProgram::Reflection,
        BuiltinProgram::FixedColor,
        BuiltinProgram::Skybox,
    ];

    /// Also the file stem looked up in a shader override directory.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinProgram::Phong => "phong",
            BuiltinProgram::Directional => "directional",
            BuiltinProgram::Reflection => "reflection",
            BuiltinProgram::FixedColor => "fixed_color",
            BuiltinProgram::Skybox => "skybox",
        }
    }

    pub fn texture_slot(self) -> TextureSlot {
        match self {
            BuiltinProgram::Phong | BuiltinProgram::Directional => TextureSlot::D2,
            BuiltinProgram::Reflection | BuiltinProgram::Skybox => TextureSlot::Cube,
            BuiltinProgram::FixedColor => TextureSlot::None,
        }
    }

    pub fn depth_mode(self) -> DepthMode {
        match self {
            BuiltinProgram::Skybox => DepthMode::Skybox,
            _ => DepthMode::Standard,
        }
    }

    pub fn layout(self) -> UniformLayout {
        let header = object_header();
        match self {
            BuiltinProgram::Phong => header
                .structure("DirLight", &dir_light_fields())
                .struct_array("PointLights", POINT_LIGHT_COUNT as u32, &point_light_fields())
                .build(),
            BuiltinProgram::Directional => header
                .structure("DirLight", &dir_light_fields())
                .build(),
            BuiltinProgram::Reflection | BuiltinProgram::FixedColor | BuiltinProgram::Skybox => {
                header.build()
            }
        }
    }

    /// Full WGSL for the vertex and fragment stages.
    pub fn sources(self) -> (String, String) {
        let (vert, frag) = match self {
            BuiltinProgram::Phong => (OBJECT_VERT, PHONG_FRAG),
            BuiltinProgram::Directional => (OBJECT_VERT, DIRECTIONAL_FRAG),
            BuiltinProgram::Reflection => (OBJECT_VERT, REFLECTION_FRAG),
            BuiltinProgram::FixedColor => (OBJECT_VERT, FIXED_COLOR_FRAG),
            BuiltinProgram::Skybox => (SKYBOX_VERT, SKYBOX_FRAG),
        };
        (format!("{COMMON}\n{vert}"), format!("{COMMON}\n{frag}"))
    }

    pub fn descriptor(self) -> ProgramDescriptor {
        let (vertex_source, fragment_source) = self.sources();
        ProgramDescriptor {
            name: self.name().to_string(),
            vertex_source,
            fragment_source,
            layout: self.layout(),
            texture: self.texture_slot(),
            depth: self.depth_mode(),
        }
    }
}

/// Fields every built-in block starts with, in WGSL declaration order.
fn object_header() -> UniformLayoutBuilder {
    UniformLayoutBuilder::new()
        .field("Model", UniformKind::Mat4)
        .field("PVM", UniformKind::Mat4)
        .field("CameraPos", UniformKind::Vec3)
        .field("Shininess", UniformKind::Float)
        .field("CurrentTime", UniformKind::Float)
        .field("ObjectColor", UniformKind::Vec4)
}

fn dir_light_fields() -> StructFields {
    StructFields::new()
        .field("Direction", UniformKind::Vec3)
        .field("Color", UniformKind::Vec3)
        .field("AmbientStrength", UniformKind::Float)
        .field("LightSpecularStrength", UniformKind::Float)
}

fn point_light_fields() -> StructFields {
    StructFields::new()
        .field("Position", UniformKind::Vec3)
        .field("Color", UniformKind::Vec3)
        .field("AmbientStrength", UniformKind::Float)
        .field("LightSpecularStrength", UniformKind::Float)
        .field("AttenuationConstant", UniformKind::Float)
        .field("AttenuationLinear", UniformKind::Float)
        .field("AttenuationExponent", UniformKind::Float)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(layout: &UniformLayout, name: &str) -> u32 {
        layout
            .location(name)
            .unwrap_or_else(|| panic!("missing {name}"))
            .offset
    }

    #[test]
    fn phong_layout_matches_wgsl_struct() {
        let layout = BuiltinProgram::Phong.layout();
        assert_eq!(offset(&layout, "Model"), 0);
        assert_eq!(offset(&layout, "PVM"), 64);
        assert_eq!(offset(&layout, "CameraPos"), 128);
        assert_eq!(offset(&layout, "Shininess"), 140);
        assert_eq!(offset(&layout, "CurrentTime"), 144);
        assert_eq!(offset(&layout, "ObjectColor"), 160);
        assert_eq!(offset(&layout, "DirLight.Direction"), 176);
        assert_eq!(offset(&layout, "DirLight.Color"), 192);
        assert_eq!(offset(&layout, "DirLight.AmbientStrength"), 204);
        assert_eq!(offset(&layout, "DirLight.LightSpecularStrength"), 208);
        assert_eq!(offset(&layout, "PointLights[0].Position"), 224);
        assert_eq!(offset(&layout, "PointLights[0].AttenuationExponent"), 268);
        assert_eq!(offset(&layout, "PointLights[1].Position"), 272);
        assert_eq!(offset(&layout, "PointLights[1].AttenuationExponent"), 316);
        assert_eq!(layout.size(), 320);
    }

    #[test]
    fn phong_declares_every_published_light_slot() {
        let layout = BuiltinProgram::Phong.layout();
        let light_slots = layout
            .names()
            .filter(|n| n.starts_with("PointLights[") || n.starts_with("DirLight."))
            .count();
        assert_eq!(light_slots, 18);
    }

    #[test]
    fn directional_has_no_point_lights() {
        let layout = BuiltinProgram::Directional.layout();
        assert!(layout.location("DirLight.Color").is_some());
        assert!(layout.location("PointLights[0].Position").is_none());
        assert_eq!(layout.size(), 224);
    }

    #[test]
    fn unlit_programs_share_the_header() {
        for program in [
            BuiltinProgram::Reflection,
            BuiltinProgram::FixedColor,
            BuiltinProgram::Skybox,
        ] {
            let layout = program.layout();
            assert_eq!(layout.size(), 176, "{}", program.name());
            assert!(layout.location("DirLight.Color").is_none());
        }
    }

    #[test]
    fn sources_have_entry_points() {
        for program in BuiltinProgram::ALL {
            let (vert, frag) = program.sources();
            assert!(vert.contains("fn vs_main"), "{}", program.name());
            assert!(frag.contains("fn fs_main"), "{}", program.name());
            assert!(vert.contains("struct VertexInput"));
        }
    }

    #[test]
    fn texture_slots() {
        assert_eq!(BuiltinProgram::Phong.texture_slot(), TextureSlot::D2);
        assert_eq!(BuiltinProgram::Reflection.texture_slot(), TextureSlot::Cube);
        assert_eq!(BuiltinProgram::FixedColor.texture_slot(), TextureSlot::None);
        assert_eq!(BuiltinProgram::Skybox.depth_mode(), DepthMode::Skybox);
    }
}

//! Byte layout of a program's uniform block, addressed by name.
//!
//! Offsets follow WGSL uniform address-space rules: scalars align to 4,
//! `vec3`/`vec4`/`mat4x4` align to 16 and nested structs start and end on
//! 16-byte boundaries. Array elements of struct type are therefore laid
//! out with a stride of the rounded struct size.

use std::collections::HashMap;

use super::value::UniformKind;

/// Byte offset and type of one named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformLocation {
    pub offset: u32,
    pub kind: UniformKind,
}

/// Named fields of one uniform block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformLayout {
    fields: HashMap<String, UniformLocation>,
    size: u32,
}

impl UniformLayout {
    /// Resolve a name such as `"PVM"` or `"PointLights[1].Color"`.
    pub fn location(&self, name: &str) -> Option<UniformLocation> {
        self.fields.get(name).copied()
    }

    /// Total block size in bytes (a multiple of 16, at least 16).
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Ordered field list for a nested struct type.
#[derive(Debug, Clone, Default)]
pub struct StructFields {
    fields: Vec<(String, UniformKind)>,
}

impl StructFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, kind: UniformKind) -> Self {
        self.fields.push((name.to_string(), kind));
        self
    }

    /// Lay out the fields from offset 0; returns offsets and the padded size.
    fn layout(&self) -> (Vec<(String, UniformLocation)>, u32) {
        let mut cursor = 0;
        let mut out = Vec::with_capacity(self.fields.len());
        for (name, kind) in &self.fields {
            let offset = align_to(cursor, kind.align());
            out.push((name.clone(), UniformLocation { offset, kind: *kind }));
            cursor = offset + kind.size();
        }
        (out, align_to(cursor, 16))
    }
}

/// Builds a [`UniformLayout`] from fields declared in shader order.
#[derive(Debug, Default)]
pub struct UniformLayoutBuilder {
    layout: UniformLayout,
    cursor: u32,
}

impl UniformLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, kind: UniformKind) -> Self {
        let offset = align_to(self.cursor, kind.align());
        self.insert(name.to_string(), UniformLocation { offset, kind });
        self.cursor = offset + kind.size();
        self
    }

    /// A nested struct member, fields addressed as `"<name>.<Field>"`.
    pub fn structure(mut self, name: &str, fields: &StructFields) -> Self {
        let (members, size) = fields.layout();
        let base = align_to(self.cursor, 16);
        for (field, loc) in members {
            self.insert(
                format!("{name}.{field}"),
                UniformLocation {
                    offset: base + loc.offset,
                    kind: loc.kind,
                },
            );
        }
        self.cursor = base + size;
        self
    }

    /// A fixed-size array of structs, addressed as `"<name>[i].<Field>"`.
    pub fn struct_array(mut self, name: &str, count: u32, fields: &StructFields) -> Self {
        let (members, stride) = fields.layout();
        let base = align_to(self.cursor, 16);
        for i in 0..count {
            for (field, loc) in &members {
                self.insert(
                    format!("{name}[{i}].{field}"),
                    UniformLocation {
                        offset: base + i * stride + loc.offset,
                        kind: loc.kind,
                    },
                );
            }
        }
        self.cursor = base + count * stride;
        self
    }

    pub fn build(mut self) -> UniformLayout {
        self.layout.size = align_to(self.cursor, 16).max(16);
        self.layout
    }

    fn insert(&mut self, name: String, location: UniformLocation) {
        if self.layout.fields.insert(name.clone(), location).is_some() {
            tracing::warn!("uniform {name} declared twice; keeping the later offset");
        }
    }
}

const fn align_to(value: u32, align: u32) -> u32 {
    value.div_ceil(align) * align
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_fields() -> StructFields {
        StructFields::new()
            .field("Position", UniformKind::Vec3)
            .field("Color", UniformKind::Vec3)
            .field("AmbientStrength", UniformKind::Float)
            .field("LightSpecularStrength", UniformKind::Float)
    }

    #[test]
    fn scalars_pack_after_vec3() {
        let layout = UniformLayoutBuilder::new()
            .field("CameraPos", UniformKind::Vec3)
            .field("Shininess", UniformKind::Float)
            .field("CurrentTime", UniformKind::Float)
            .build();
        assert_eq!(layout.location("CameraPos").unwrap().offset, 0);
        assert_eq!(layout.location("Shininess").unwrap().offset, 12);
        assert_eq!(layout.location("CurrentTime").unwrap().offset, 16);
        assert_eq!(layout.size(), 32);
    }

    #[test]
    fn vectors_align_to_16() {
        let layout = UniformLayoutBuilder::new()
            .field("Flag", UniformKind::Int)
            .field("Color", UniformKind::Vec4)
            .field("Model", UniformKind::Mat4)
            .build();
        assert_eq!(layout.location("Color").unwrap().offset, 16);
        assert_eq!(layout.location("Model").unwrap().offset, 32);
        assert_eq!(layout.size(), 96);
    }

    #[test]
    fn nested_struct_offsets() {
        let layout = UniformLayoutBuilder::new()
            .field("Time", UniformKind::Float)
            .structure("DirLight", &light_fields())
            .field("After", UniformKind::Float)
            .build();
        assert_eq!(layout.location("DirLight.Position").unwrap().offset, 16);
        assert_eq!(layout.location("DirLight.Color").unwrap().offset, 32);
        assert_eq!(layout.location("DirLight.AmbientStrength").unwrap().offset, 44);
        assert_eq!(layout.location("DirLight.LightSpecularStrength").unwrap().offset, 48);
        // struct size 36 rounds to 48, so the next member starts at 16 + 48
        assert_eq!(layout.location("After").unwrap().offset, 64);
        assert_eq!(layout.size(), 80);
    }

    #[test]
    fn struct_array_stride() {
        let fields = light_fields().field("AttenuationExponent", UniformKind::Float);
        let layout = UniformLayoutBuilder::new()
            .struct_array("PointLights", 2, &fields)
            .build();
        assert_eq!(layout.location("PointLights[0].Position").unwrap().offset, 0);
        assert_eq!(layout.location("PointLights[1].Position").unwrap().offset, 48);
        assert_eq!(
            layout.location("PointLights[1].AttenuationExponent").unwrap().offset,
            48 + 36
        );
        assert_eq!(layout.len(), 10);
        assert_eq!(layout.size(), 96);
    }

    #[test]
    fn unknown_name_has_no_location() {
        let layout = UniformLayoutBuilder::new()
            .field("PVM", UniformKind::Mat4)
            .build();
        assert!(layout.location("Model").is_none());
        assert!(layout.location("pvm").is_none());
    }

    #[test]
    fn empty_layout_is_sixteen_bytes() {
        let layout = UniformLayoutBuilder::new().build();
        assert!(layout.is_empty());
        assert_eq!(layout.size(), 16);
    }
}

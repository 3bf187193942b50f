use std::{fmt, str::FromStr};

use crate::ShaderToolsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
    Geometry,
    TessControl,
    TessEvaluation,
    Task,
    Mesh,
    RayGeneration,
    Intersection,
    AnyHit,
    ClosestHit,
    Miss,
    Callable,
}

impl ShaderStage {
    /// The short tag `glslc -fshader-stage` uses for this stage.
    pub fn tag(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
            ShaderStage::Compute => "comp",
            ShaderStage::Geometry => "geom",
            ShaderStage::TessControl => "tesc",
            ShaderStage::TessEvaluation => "tese",
            ShaderStage::Task => "task",
            ShaderStage::Mesh => "mesh",
            ShaderStage::RayGeneration => "rgen",
            ShaderStage::Intersection => "rint",
            ShaderStage::AnyHit => "rahit",
            ShaderStage::ClosestHit => "rchit",
            ShaderStage::Miss => "rmiss",
            ShaderStage::Callable => "rcall",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShaderStage {
    type Err = ShaderToolsError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let stage = match tag.to_ascii_lowercase().as_str() {
            "vert" | "vertex" => ShaderStage::Vertex,
            "frag" | "fragment" => ShaderStage::Fragment,
            "comp" | "compute" => ShaderStage::Compute,
            "geom" | "geometry" => ShaderStage::Geometry,
            "tesc" | "tesscontrol" => ShaderStage::TessControl,
            "tese" | "tesseval" => ShaderStage::TessEvaluation,
            "task" => ShaderStage::Task,
            "mesh" => ShaderStage::Mesh,
            "rgen" => ShaderStage::RayGeneration,
            "rint" => ShaderStage::Intersection,
            "rahit" => ShaderStage::AnyHit,
            "rchit" => ShaderStage::ClosestHit,
            "rmiss" => ShaderStage::Miss,
            "rcall" => ShaderStage::Callable,
            _ => return Err(ShaderToolsError::UnknownStage(tag.to_owned())),
        };
        Ok(stage)
    }
}

impl From<ShaderStage> for shaderc::ShaderKind {
    fn from(stage: ShaderStage) -> Self {
        match stage {
            ShaderStage::Vertex => shaderc::ShaderKind::Vertex,
            ShaderStage::Fragment => shaderc::ShaderKind::Fragment,
            ShaderStage::Compute => shaderc::ShaderKind::Compute,
            ShaderStage::Geometry => shaderc::ShaderKind::Geometry,
            ShaderStage::TessControl => shaderc::ShaderKind::TessControl,
            ShaderStage::TessEvaluation => shaderc::ShaderKind::TessEvaluation,
            ShaderStage::Task => shaderc::ShaderKind::Task,
            ShaderStage::Mesh => shaderc::ShaderKind::Mesh,
            ShaderStage::RayGeneration => shaderc::ShaderKind::RayGeneration,
            ShaderStage::Intersection => shaderc::ShaderKind::Intersection,
            ShaderStage::AnyHit => shaderc::ShaderKind::AnyHit,
            ShaderStage::ClosestHit => shaderc::ShaderKind::ClosestHit,
            ShaderStage::Miss => shaderc::ShaderKind::Miss,
            ShaderStage::Callable => shaderc::ShaderKind::Callable,
        }
    }
}

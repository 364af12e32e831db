use thiserror::Error;

/// Failures while turning a loaded glTF into the glow point cloud. These are
/// logged rather than unwound: a rejected model leaves the demo running with
/// an empty scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("model contains no mesh to use as a point cloud")]
    MissingPointMesh,

    #[error("point mesh carries no position attribute")]
    MissingPositions,

    #[error("position attribute is not three 32-bit floats per vertex")]
    UnexpectedPositionFormat,
}

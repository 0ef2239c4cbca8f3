use crate::layer::LayerId;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid color literal '{0}' (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor(String),

    #[error("layer {0:?} is not part of this tree")]
    UnknownLayer(LayerId),

    #[error("layout failed: {0}")]
    Layout(String),
}

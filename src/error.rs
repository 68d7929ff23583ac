use thiserror::Error;

/// Errors that end the game process.
///
/// Nothing that happens during play is an error; these only come out of
/// startup (SDL, assets, tuning file) or a failed SDL draw call.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("failed to load {path}: {reason}")]
    AssetLoad { path: String, reason: String },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<String> for GameError {
    fn from(error: String) -> Self {
        GameError::Sdl(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_string_converts() {
        let error: GameError = "Renderer lost".to_string().into();
        assert!(matches!(error, GameError::Sdl(_)));
        assert_eq!(error.to_string(), "SDL error: Renderer lost");
    }

    #[test]
    fn test_asset_load_message_names_path() {
        let error = GameError::AssetLoad {
            path: "assets/sprites/turkey.png".to_string(),
            reason: "No such file".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to load assets/sprites/turkey.png: No such file"
        );
    }
}

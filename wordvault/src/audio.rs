use std::process::Stdio;

use dictionary::Word;
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("this entry has no pronunciation audio")]
    NoAudio,
    #[error("couldn't start the audio player `{player}`: {source}")]
    Spawn {
        player: String,
        source: std::io::Error,
    },
    #[error("the audio player exited with {0}")]
    Player(std::process::ExitStatus),
}

/// Plays the entry's pronunciation by handing its audio url to an
/// external player process.
pub async fn play_pronunciation(player: &str, word: &Word) -> Result<(), PlaybackError> {
    let url = word.audio_url().ok_or(PlaybackError::NoAudio)?;
    play(player, url).await
}

async fn play(player: &str, url: &str) -> Result<(), PlaybackError> {
    tracing::debug!("playing {url} with {player}");
    let status = Command::new(player)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|source| PlaybackError::Spawn {
            player: player.to_owned(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(PlaybackError::Player(status))
    }
}

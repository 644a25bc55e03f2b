use crate::Error;
use std::fmt;
use url::Url;

const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed";
const VIMEO_EMBED: &str = "https://player.vimeo.com/video";

/// Third-party video host an [`Embed`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    YouTube,
    Vimeo,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::YouTube => f.write_str("YouTube"),
            Provider::Vimeo => f.write_str("Vimeo"),
        }
    }
}

/// Playback flags baked into every embed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    pub muted: bool,
    pub controls: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Playback {
            muted: true,
            controls: true,
        }
    }
}

/// A resolved embed address for a single video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    provider: Provider,
    video_id: String,
    url: Url,
}

impl Embed {
    /// Resolves a YouTube or Vimeo page URL into the provider's embed address.
    ///
    /// Autoplay is always requested; mute and controls follow `playback`.
    pub fn resolve(source: &str, playback: Playback) -> Result<Self, Error> {
        let source = Url::parse(source.trim())?;
        let host = source
            .host_str()
            .ok_or_else(|| Error::Unsupported(source.to_string()))?
            .to_ascii_lowercase();

        let embed = match classify(&host) {
            Some(Host::YouTube) => {
                let video_id = query_value(&source, "v").ok_or(Error::MissingVideoId)?;
                youtube(video_id, playback)?
            }
            Some(Host::YouTubeShort) => {
                let video_id = path_segment(&source, 0).ok_or(Error::MissingVideoId)?;
                youtube(video_id, playback)?
            }
            Some(Host::Vimeo) => {
                let video_id = path_segment(&source, 0).ok_or(Error::MissingVideoId)?;
                vimeo(video_id, query_value(&source, "h"), playback)?
            }
            Some(Host::VimeoPlayer) => {
                let video_id = path_segment(&source, 1).ok_or(Error::MissingVideoId)?;
                vimeo(video_id, query_value(&source, "h"), playback)?
            }
            None => {
                log::warn!("no embed provider for host {host}");
                return Err(Error::Unsupported(host));
            }
        };

        log::debug!("resolved {source} to {}", embed.url);
        Ok(embed)
    }

    /// The host serving this video.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// The provider-specific video identifier.
    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    /// The full embed address.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Embed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

enum Host {
    YouTube,
    YouTubeShort,
    Vimeo,
    VimeoPlayer,
}

fn classify(host: &str) -> Option<Host> {
    let is = |domain: &str| host == domain || host.ends_with(&format!(".{domain}"));

    if host == "youtu.be" {
        Some(Host::YouTubeShort)
    } else if is("youtube.com") {
        Some(Host::YouTube)
    } else if host == "player.vimeo.com" {
        Some(Host::VimeoPlayer)
    } else if is("vimeo.com") {
        Some(Host::Vimeo)
    } else {
        None
    }
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

fn path_segment(url: &Url, index: usize) -> Option<String> {
    url.path_segments()?
        .nth(index)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn youtube(video_id: String, playback: Playback) -> Result<Embed, Error> {
    let mut url = Url::parse(YOUTUBE_EMBED)?;
    push_segment(&mut url, &video_id)?;
    url.query_pairs_mut()
        .append_pair("autoplay", "1")
        .append_pair("mute", flag(playback.muted))
        .append_pair("controls", flag(playback.controls));

    Ok(Embed {
        provider: Provider::YouTube,
        video_id,
        url,
    })
}

fn vimeo(video_id: String, hash: Option<String>, playback: Playback) -> Result<Embed, Error> {
    let mut url = Url::parse(VIMEO_EMBED)?;
    push_segment(&mut url, &video_id)?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("autoplay", "1")
            .append_pair("muted", flag(playback.muted))
            .append_pair("controls", flag(playback.controls));
        if let Some(hash) = hash {
            query.append_pair("h", &hash);
        }
    }

    Ok(Embed {
        provider: Provider::Vimeo,
        video_id,
        url,
    })
}

fn push_segment(url: &mut Url, segment: &str) -> Result<(), Error> {
    url.path_segments_mut()
        .map_err(|_| Error::Unsupported(segment.to_owned()))?
        .push(segment);
    Ok(())
}

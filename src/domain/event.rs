use serde::Serialize;

/// The one piece of media an event card shows. Paths are opaque and resolved
/// by the static asset service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Media {
    Image { src: String },
    Video { src: String, poster: Option<String> },
}

impl Media {
    pub fn image(src: impl Into<String>) -> Self {
        Media::Image { src: src.into() }
    }

    pub fn video(src: impl Into<String>) -> Self {
        Media::Video { src: src.into(), poster: None }
    }

    /// A video card shows `poster` until it plays.
    pub fn video_with_poster(src: impl Into<String>, poster: impl Into<String>) -> Self {
        Media::Video {
            src: src.into(),
            poster: Some(poster.into()),
        }
    }

    pub fn src(&self) -> &str {
        match self {
            Media::Image { src } | Media::Video { src, .. } => src,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Media::Video { .. })
    }

    /// Thumbnail for a video that isn't playing yet.
    pub fn poster(&self) -> Option<&str> {
        match self {
            Media::Video { poster, .. } => poster.as_deref(),
            Media::Image { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub media: Media,
}

impl Event {
    pub fn new(title: impl Into<String>, description: impl Into<String>, media: Media) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            description: description.into(),
            media,
        }
    }

    /// Blank subtitles are dropped so cards don't render an empty heading.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        let subtitle = subtitle.into();
        self.subtitle = if subtitle.trim().is_empty() {
            None
        } else {
            Some(subtitle)
        };
        self
    }
}

/// Ordered, immutable list of upcoming events shown on the landing page.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Events on the coming-soon page.
pub fn default_events() -> EventCatalog {
    EventCatalog::new(vec![
        Event::new(
            "Fire & Prayer Conference",
            "Don't miss this power-packed moment!",
            Media::image("/fire-conference-flyer.png"),
        )
        .with_subtitle("25th - 26th July, 2025"),
        Event::new(
            "Fire & Prayer Conference Jingle",
            "Watch our Fire & Prayer Conference highlights.",
            Media::video_with_poster("/fire-conference-video.mp4", "/fire-conference-flyer.png"),
        )
        .with_subtitle(" "),
        Event::new(
            "Empowerment Program",
            "Don't miss this!!",
            Media::image("/empowerment-flyer.png"),
        )
        .with_subtitle("22nd - 23rd July, 2025"),
    ])
}

// SPDX-License-Identifier: MPL-2.0
//! Modal requests and their presentation settings.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Unique identifier of a modal request.
///
/// Drawn from a process-wide counter, so an id is never handed out twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModalId(u64);

impl ModalId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "modal-{}", self.0)
    }
}

/// Where the modal sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationKind {
    Fullscreen,
    Sheet,
    #[default]
    Center,
}

/// How the modal enters and leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    Slide,
    #[default]
    Fade,
    None,
}

/// Fallback presentation used when a spec leaves it unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalDefaults {
    pub presentation: PresentationKind,
    pub transition: TransitionKind,
}

/// Callback run when a request is dismissed on its own.
pub type OnClose = Box<dyn FnOnce()>;

/// What the caller asks to show; becomes a [`ModalRequest`] once queued.
///
/// `C` is the renderable payload. The queue never looks inside it.
pub struct ModalSpec<C> {
    content: C,
    title: Option<String>,
    presentation: Option<PresentationKind>,
    transition: Option<TransitionKind>,
    background_color: Option<String>,
    corner_radius: Option<f32>,
    max_height: Option<f32>,
    on_close: Option<OnClose>,
}

impl<C> ModalSpec<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            title: None,
            presentation: None,
            transition: None,
            background_color: None,
            corner_radius: None,
            max_height: None,
            on_close: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn presentation(mut self, presentation: PresentationKind) -> Self {
        self.presentation = Some(presentation);
        self
    }

    #[must_use]
    pub fn transition(mut self, transition: TransitionKind) -> Self {
        self.transition = Some(transition);
        self
    }

    #[must_use]
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub(super) fn into_request(self, defaults: ModalDefaults) -> ModalRequest<C> {
        ModalRequest {
            id: ModalId::next(),
            content: self.content,
            title: self.title,
            presentation: self.presentation.unwrap_or(defaults.presentation),
            transition: self.transition.unwrap_or(defaults.transition),
            background_color: self.background_color,
            corner_radius: self.corner_radius,
            max_height: self.max_height,
            on_close: self.on_close,
        }
    }
}

/// A queued modal.
pub struct ModalRequest<C> {
    id: ModalId,
    content: C,
    title: Option<String>,
    presentation: PresentationKind,
    transition: TransitionKind,
    background_color: Option<String>,
    corner_radius: Option<f32>,
    max_height: Option<f32>,
    on_close: Option<OnClose>,
}

impl<C> ModalRequest<C> {
    #[must_use]
    pub fn id(&self) -> ModalId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn presentation(&self) -> PresentationKind {
        self.presentation
    }

    #[must_use]
    pub fn transition(&self) -> TransitionKind {
        self.transition
    }

    #[must_use]
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    #[must_use]
    pub fn corner_radius(&self) -> Option<f32> {
        self.corner_radius
    }

    #[must_use]
    pub fn max_height(&self) -> Option<f32> {
        self.max_height
    }

    #[must_use]
    pub fn has_on_close(&self) -> bool {
        self.on_close.is_some()
    }

    pub(super) fn apply(&mut self, update: ModalUpdate<C>) {
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(title) = update.title {
            self.title = Some(title);
        }
        if let Some(presentation) = update.presentation {
            self.presentation = presentation;
        }
        if let Some(transition) = update.transition {
            self.transition = transition;
        }
        if let Some(color) = update.background_color {
            self.background_color = Some(color);
        }
        if let Some(radius) = update.corner_radius {
            self.corner_radius = Some(radius);
        }
        if let Some(height) = update.max_height {
            self.max_height = Some(height);
        }
        if let Some(callback) = update.on_close {
            self.on_close = Some(callback);
        }
    }

    /// Consumes the request, running its close callback if it has one.
    pub(super) fn close(self) {
        if let Some(callback) = self.on_close {
            callback();
        }
    }
}

/// Partial change to a queued request; `None` fields are left as they are.
pub struct ModalUpdate<C> {
    content: Option<C>,
    title: Option<String>,
    presentation: Option<PresentationKind>,
    transition: Option<TransitionKind>,
    background_color: Option<String>,
    corner_radius: Option<f32>,
    max_height: Option<f32>,
    on_close: Option<OnClose>,
}

impl<C> Default for ModalUpdate<C> {
    fn default() -> Self {
        Self {
            content: None,
            title: None,
            presentation: None,
            transition: None,
            background_color: None,
            corner_radius: None,
            max_height: None,
            on_close: None,
        }
    }
}

impl<C> ModalUpdate<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn content(mut self, content: C) -> Self {
        self.content = Some(content);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn presentation(mut self, presentation: PresentationKind) -> Self {
        self.presentation = Some(presentation);
        self
    }

    #[must_use]
    pub fn transition(mut self, transition: TransitionKind) -> Self {
        self.transition = Some(transition);
        self
    }

    #[must_use]
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Replaces the close callback.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }
}

impl<C: fmt::Debug> fmt::Debug for ModalSpec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalSpec")
            .field("content", &self.content)
            .field("title", &self.title)
            .field("presentation", &self.presentation)
            .field("transition", &self.transition)
            .field("on_close", &self.on_close.is_some())
            .finish_non_exhaustive()
    }
}

impl<C: fmt::Debug> fmt::Debug for ModalRequest<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalRequest")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("title", &self.title)
            .field("presentation", &self.presentation)
            .field("transition", &self.transition)
            .field("background_color", &self.background_color)
            .field("corner_radius", &self.corner_radius)
            .field("max_height", &self.max_height)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

impl<C: fmt::Debug> fmt::Debug for ModalUpdate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalUpdate")
            .field("content", &self.content)
            .field("title", &self.title)
            .field("on_close", &self.on_close.is_some())
            .finish_non_exhaustive()
    }
}

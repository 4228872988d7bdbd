//! Default facade adapter: tag merging and level dispatch over a `LogSink`

use super::log_level::LogLevel;
use super::log_tags::{AppComponent, LogTags, DEFAULT_APP_COMPONENT_TAG};
use super::sink::LogSink;
use super::structured_logger::StructuredLogger;
use std::fmt;
use std::sync::Arc;

/// Diagnostic recorded instead of a message whose level the sink cannot map
pub fn unmapped_level_message(level: LogLevel) -> String {
    format!(
        "Mapping log level '{}' onto sink level failed. Not logging event",
        level.name()
    )
}

/// Tag-aware logger over a shared sink.
///
/// A `TaggedLogger` is a value: the derivation methods of
/// [`StructuredLogger`] return a new logger that shares the sink and owns
/// copies of everything else, so siblings derived from one parent never see
/// each other's tags.
///
/// # Example
///
/// ```
/// use rust_log_facade::prelude::*;
/// use rust_log_facade::info;
/// use std::sync::Arc;
///
/// let memory = MemoryAppender::new();
/// let backend = Backend::builder().appender(memory.clone()).build();
/// let logger = TaggedLogger::new(Arc::new(backend))
///     .for_component("billing")
///     .with_static_tags(LogTags::new().with_tag("env", "prod"));
///
/// info!(logger, "invoice {} sent", 42);
///
/// let entry = memory.last().unwrap();
/// assert_eq!(entry.message, "invoice 42 sent");
/// assert_eq!(entry.tags.len(), 2);
/// ```
pub struct TaggedLogger<S> {
    sink: Arc<S>,
    component: AppComponent,
    component_label: String,
    static_tags: LogTags,
}

impl<S: LogSink> TaggedLogger<S> {
    /// Root logger: no component, default component label, no static tags
    #[must_use]
    pub fn new(sink: Arc<S>) -> Self {
        Self {
            sink,
            component: AppComponent::default(),
            component_label: DEFAULT_APP_COMPONENT_TAG.to_string(),
            static_tags: LogTags::new(),
        }
    }

    #[must_use]
    pub fn from_sink(sink: S) -> Self {
        Self::new(Arc::new(sink))
    }

    pub fn sink(&self) -> &Arc<S> {
        &self.sink
    }

    pub fn component(&self) -> &AppComponent {
        &self.component
    }

    pub fn component_label(&self) -> &str {
        &self.component_label
    }

    pub fn static_tags(&self) -> &LogTags {
        &self.static_tags
    }

    /// Tags an entry logged with `call_tags` would carry.
    ///
    /// Static tags first, call-site tags over them, and the component tag
    /// (when a component is set) over both.
    pub fn effective_tags(&self, call_tags: &LogTags) -> LogTags {
        let mut merged = self.static_tags.combine(call_tags);
        if !self.component.is_empty() {
            merged.insert(self.component_label.clone(), self.component.clone());
        }
        merged
    }
}

impl<S> Clone for TaggedLogger<S> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            component: self.component.clone(),
            component_label: self.component_label.clone(),
            static_tags: self.static_tags.clone(),
        }
    }
}

impl<S> fmt::Debug for TaggedLogger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedLogger")
            .field("component", &self.component)
            .field("component_label", &self.component_label)
            .field("static_tags", &self.static_tags)
            .finish_non_exhaustive()
    }
}

impl<S: LogSink> StructuredLogger for TaggedLogger<S> {
    fn for_component(&self, component: impl Into<AppComponent>) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            component: component.into(),
            component_label: self.component_label.clone(),
            static_tags: self.static_tags.clone(),
        }
    }

    fn with_component_label(&self, label: impl Into<String>) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            component: self.component.clone(),
            component_label: label.into(),
            static_tags: self.static_tags.clone(),
        }
    }

    fn with_static_tags(&self, tags: LogTags) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            component: self.component.clone(),
            component_label: self.component_label.clone(),
            static_tags: tags,
        }
    }

    fn log_with_tags_fmt(&self, level: LogLevel, tags: &LogTags, args: fmt::Arguments<'_>) {
        let Some(native) = self.sink.resolve_level(level.name()) else {
            self.sink.emit(
                self.sink.error_level(),
                &LogTags::new(),
                &unmapped_level_message(level),
            );
            return;
        };

        let merged = self.effective_tags(tags);
        self.sink.emit(native, &merged, &fmt::format(args));
    }
}

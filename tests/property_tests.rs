//! Property-based tests for tag merging and level naming
//!
//! These tests verify:
//! - Every static and call-site key reaches the sink
//! - Call-site tags beat static tags; the component tag beats both
//! - `with_static_tags` replaces rather than accumulates
//! - Derivation leaves the parent logger untouched

use proptest::prelude::*;
use rust_log_facade::appenders::MemoryAppender;
use rust_log_facade::backend::{Backend, BackendLevel, RecordingTerminal};
use rust_log_facade::core::{LogLevel, LogTags, StructuredLogger, TagValue, TaggedLogger};
use std::collections::HashMap;
use std::sync::Arc;

fn memory_logger() -> (TaggedLogger<Backend>, MemoryAppender) {
    let memory = MemoryAppender::new();
    let logger = Backend::builder()
        .min_level(BackendLevel::Trace)
        .appender(memory.clone())
        .terminal(Arc::new(RecordingTerminal::new()))
        .build()
        .into_logger();
    (logger, memory)
}

fn tag_map() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map("[a-z]{1,6}", "[a-zA-Z0-9]{0,8}", 0..6)
}

fn to_tags(map: &HashMap<String, String>) -> LogTags {
    map.iter()
        .map(|(k, v)| (k.clone(), TagValue::from(v.as_str())))
        .collect()
}

proptest! {
    #[test]
    fn test_all_keys_present_and_call_wins(
        static_map in tag_map(),
        call_map in tag_map(),
    ) {
        let (logger, memory) = memory_logger();
        let logger = logger.with_static_tags(to_tags(&static_map));

        logger.info_with_tags(&to_tags(&call_map), format_args!("merge"));

        let entry = memory.last().unwrap();
        for (key, value) in &static_map {
            prop_assert!(entry.tags.contains_key(key));
            if !call_map.contains_key(key) {
                prop_assert_eq!(entry.tags.get(key).and_then(TagValue::as_str), Some(value.as_str()));
            }
        }
        for (key, value) in &call_map {
            prop_assert_eq!(entry.tags.get(key).and_then(TagValue::as_str), Some(value.as_str()));
        }

        let expected: std::collections::HashSet<&String> =
            static_map.keys().chain(call_map.keys()).collect();
        prop_assert_eq!(entry.tags.len(), expected.len());
    }

    #[test]
    fn test_component_beats_colliding_tags(
        component in "[a-z]{1,10}",
        label in "[a-z]{1,6}",
        static_value in "[a-z]{0,6}",
        call_value in "[a-z]{0,6}",
    ) {
        let (logger, memory) = memory_logger();
        let logger = logger
            .with_component_label(label.clone())
            .with_static_tags(LogTags::new().with_tag(label.clone(), static_value))
            .for_component(component.clone());

        logger.warn_with_tags(
            &LogTags::new().with_tag(label.clone(), call_value),
            format_args!("collide"),
        );

        let entry = memory.last().unwrap();
        prop_assert_eq!(entry.tags.get(&label).and_then(TagValue::as_str), Some(component.as_str()));
        prop_assert_eq!(entry.tags.len(), 1);
    }

    #[test]
    fn test_static_tags_replace(first in tag_map(), second in tag_map()) {
        let (logger, memory) = memory_logger();
        let logger = logger
            .with_static_tags(to_tags(&first))
            .with_static_tags(to_tags(&second));

        logger.debug(format_args!("replaced"));

        prop_assert_eq!(memory.last().unwrap().tags, to_tags(&second));
    }

    #[test]
    fn test_derivation_leaves_parent_untouched(
        component in "[a-z]{1,10}",
        tags in tag_map(),
    ) {
        let (parent, memory) = memory_logger();
        let _child = parent
            .for_component(component)
            .with_component_label("svc")
            .with_static_tags(to_tags(&tags));

        parent.info(format_args!("parent"));

        prop_assert!(memory.last().unwrap().tags.is_empty());
        prop_assert!(parent.component().is_empty());
        prop_assert_eq!(parent.component_label(), "appComponent");
    }

    #[test]
    fn test_unknown_levels_are_named_unknown(raw in 7u32..) {
        let level = LogLevel::from(raw);
        prop_assert_eq!(level.name(), "unknown");
        prop_assert!(!level.is_known());
    }

    #[test]
    fn test_unknown_levels_are_dropped(raw in 7u32.., message in "[a-z ]{0,20}") {
        let (logger, memory) = memory_logger();

        logger.log(LogLevel::from(raw), &message);

        let entries = memory.entries();
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(entries[0].level, BackendLevel::Error);
        prop_assert!(entries[0].tags.is_empty());
        prop_assert_eq!(
            entries[0].message.as_str(),
            "Mapping log level 'unknown' onto sink level failed. Not logging event"
        );
    }
}

#[test]
fn test_known_level_names_are_distinct() {
    let names: std::collections::HashSet<&str> =
        LogLevel::ALL.iter().map(|level| level.name()).collect();
    assert_eq!(names.len(), LogLevel::ALL.len());
    assert!(!names.contains("unknown"));
}

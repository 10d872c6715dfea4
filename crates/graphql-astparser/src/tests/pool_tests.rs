//! Tests for buffer reuse through [`Pool`] and [`ParseContext`].

use crate::ast::NodeKind;
use crate::pool::Pool;
use crate::pool::Reset;
use crate::tests::utils::text;
use crate::ParseContext;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Counter {
    hits: usize,
    resets: usize,
}

impl Reset for Counter {
    fn reset(&mut self) {
        self.hits = 0;
        self.resets += 1;
    }
}

#[test]
fn released_values_are_reset_and_reused() {
    let pool: Pool<Counter> = Pool::default();
    assert_eq!(pool.idle_count(), 0);
    {
        let mut counter = pool.acquire();
        counter.hits = 7;
        assert_eq!(pool.idle_count(), 0);
    }
    assert_eq!(pool.idle_count(), 1);

    let counter = pool.acquire();
    assert_eq!(counter.hits, 0);
    assert_eq!(counter.resets, 1);
    assert_eq!(pool.idle_count(), 0);
}

#[test]
fn factory_runs_only_when_idle_list_is_empty() {
    let created = Arc::new(AtomicUsize::new(0));
    let pool = {
        let created = Arc::clone(&created);
        Pool::new(move || {
            created.fetch_add(1, Ordering::SeqCst);
            Counter::default()
        })
    };

    let first = pool.acquire();
    let second = pool.acquire();
    assert_eq!(created.load(Ordering::SeqCst), 2);
    drop(first);
    drop(second);
    assert_eq!(pool.idle_count(), 2);

    let _third = pool.acquire();
    assert_eq!(created.load(Ordering::SeqCst), 2);
}

/// Verifies a reused context carries nothing over from its previous parse.
#[test]
fn parse_context_reuse_leaves_no_residue() {
    let mut context = ParseContext::new();
    context.parse(b"type Query { hero: Character } scalar Date").unwrap();
    assert_eq!(context.document.root_nodes.len(), 2);

    context.parse(b"{ hero { name } }").unwrap();
    assert_eq!(context.document.root_nodes.len(), 1);
    assert_eq!(context.document.root_nodes[0].kind, NodeKind::OperationDefinition);
    assert!(context.document.object_type_definitions.is_empty());
    assert!(context.document.scalar_type_definitions.is_empty());
    assert!(context.document.field_definitions.is_empty());
    let names: Vec<String> = context
        .document
        .fields
        .iter()
        .map(|field| text(&context.input, field.name))
        .collect();
    assert_eq!(names, vec!["name", "hero"]);
}

/// Verifies a failed parse does not poison the next one.
#[test]
fn parse_context_recovers_after_error() {
    let mut context = ParseContext::new();
    assert!(context.parse(b"{ a { b ").is_err());
    assert!(!context.document.is_empty());

    context.parse(b"{ c }").unwrap();
    assert_eq!(context.document.fields.len(), 1);
    assert_eq!(text(&context.input, context.document.fields[0].name), "c");
}

#[test]
fn reset_keeps_capacity() {
    let mut context = ParseContext::new();
    context.parse(b"{ a b c d e f g h }").unwrap();
    let capacity = context.document.fields.capacity();
    context.reset();
    assert!(context.document.is_empty());
    assert!(context.input.is_empty());
    assert!(context.document.fields.capacity() >= capacity);
}

/// Verifies pooled contexts can be shared across threads.
#[test]
fn pooled_contexts_across_threads() {
    let pool: Arc<Pool<ParseContext>> = Arc::new(Pool::default());
    let handles: Vec<_> = (0..4)
        .map(|thread| {
            let pool = Arc::clone(&pool);
            std::thread::spawn(move || {
                for iteration in 0..25 {
                    let source = format!("query Q{thread}_{iteration} {{ field{iteration} }}");
                    let mut context = pool.acquire();
                    context.parse(source.as_bytes()).unwrap();
                    let operation = &context.document.operation_definitions[0];
                    let name = operation.name.map(|name| text(&context.input, name));
                    assert_eq!(name, Some(format!("Q{thread}_{iteration}")));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert!(pool.idle_count() >= 1);
    assert!(pool.idle_count() <= 4);
}

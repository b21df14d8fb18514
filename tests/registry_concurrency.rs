use std::sync::{Arc, Barrier};
use std::thread;

use rand::SeedableRng;
use rand::rngs::StdRng;
use slug_guard::prelude::*;

const BASE_URL: &str = "http://localhost:8080";

#[test]
fn test_concurrent_custom_slug_creation_has_one_winner() {
    const THREADS: usize = 12;

    let registry = Arc::new(InMemoryLinkRegistry::new());
    let filter = Arc::new(ContentFilter::with_default_words());
    let validation = Arc::new(ValidationService::with_rng(
        registry.clone(),
        filter,
        StdRng::seed_from_u64(5),
    ));
    let service = Arc::new(LinkService::with_rng(
        registry.clone(),
        validation,
        BASE_URL,
        6,
        StdRng::seed_from_u64(6),
    ));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                service.create_short_link(&format!("https://site{i}.example.com"), Some("launch"))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let created = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict { .. })))
        .count();

    assert_eq!(created, 1);
    assert_eq!(conflicts, THREADS - 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_suggestions_stay_valid_while_links_are_created() {
    let registry = Arc::new(InMemoryLinkRegistry::new());
    let filter = Arc::new(ContentFilter::with_default_words());
    let validation = Arc::new(ValidationService::with_rng(
        registry.clone(),
        filter.clone(),
        StdRng::seed_from_u64(8),
    ));
    registry.insert(ShortLink::new(
        "campaign".to_string(),
        "https://example.com".to_string(),
        BASE_URL,
    ));

    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for n in 0..200 {
                registry.insert(ShortLink::new(
                    format!("filler-{n}"),
                    "https://example.com".to_string(),
                    BASE_URL,
                ));
            }
        })
    };

    for _ in 0..50 {
        let availability = validation.suggest_slug("campaign");
        assert!(!availability.available);
        assert!(availability.suggestions.len() <= 5);
        for s in &availability.suggestions {
            assert!(s.len() >= 3);
            assert_ne!(s, "campaign");
            assert!(!filter.contains(s));
        }
    }

    writer.join().unwrap();
    assert_eq!(registry.len(), 201);
}

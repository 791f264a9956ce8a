use super::*;
use crate::task::angles::RotationAngle;

fn all_keys() -> Vec<CombinationKey> {
    let mut out = Vec::with_capacity(max_keys());
    for shape_a in ShapeId::ALL {
        for shape_c in ShapeId::ALL {
            if shape_a == shape_c {
                continue;
            }
            for angle in ANGLE_CATALOG {
                out.push(CombinationKey {
                    shape_a,
                    shape_c,
                    angle,
                });
            }
        }
    }
    out
}

#[test]
fn key_space_size() {
    assert_eq!(max_keys(), 17_480);
    assert_eq!(all_keys().len(), max_keys());
}

#[test]
fn samples_are_unique_and_well_formed() {
    let mut sampler = TaskSampler::seeded(7);
    let mut keys = HashSet::new();
    for _ in 0..2_000 {
        let task = sampler.sample();
        assert_ne!(task.shape_a(), task.shape_c());
        assert_eq!(task.shape_b(), task.shape_a());
        assert_eq!(task.shape_d(), task.shape_c());
        assert!(keys.insert(task.key()));
    }
    assert_eq!(sampler.state().len(), 2_000);
    assert!(!sampler.state().is_exhausted());
}

#[test]
fn same_seed_same_sequence() {
    let mut a = TaskSampler::seeded(99);
    let mut b = TaskSampler::seeded(99);
    for _ in 0..50 {
        assert_eq!(a.sample(), b.sample());
    }
}

#[test]
fn scan_walks_catalog_order() {
    let mut sampler = TaskSampler::seeded(0);
    let first = sampler.first_unseen().unwrap();
    assert_eq!(first.shape_a, ShapeId::Square);
    assert_eq!(first.shape_c, ShapeId::Triangle);
    assert_eq!(first.angle, RotationAngle::from_degrees(15.0).unwrap());

    sampler.state.seen.insert(first);
    let second = sampler.first_unseen().unwrap();
    assert_eq!(second.shape_c, ShapeId::Triangle);
    assert_eq!(second.angle, RotationAngle::from_degrees(22.5).unwrap());
}

#[test]
fn last_free_key_is_found_then_exhaustion_is_flagged() {
    let keys = all_keys();
    let missing = keys[keys.len() / 2];

    let mut sampler = TaskSampler::seeded(3);
    sampler
        .state
        .seen
        .extend(keys.iter().copied().filter(|k| *k != missing));
    assert_eq!(sampler.state().len(), max_keys() - 1);

    let task = sampler.sample();
    assert_eq!(task.key(), missing);
    assert_eq!(sampler.state().len(), max_keys());
    assert!(!sampler.state().is_exhausted());

    let repeat = sampler.sample();
    assert!(sampler.state().is_exhausted());
    assert!(sampler.state().contains(&repeat.key()));
    assert_eq!(sampler.state().len(), max_keys());

    sampler.sample();
    assert!(sampler.state().is_exhausted());
}

#[test]
fn shared_sampler_stays_unique_across_threads() {
    let shared = SharedSampler::new(TaskSampler::seeded(11));
    let results: Vec<Vec<CombinationKey>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| (0..250).map(|_| shared.sample().key()).collect::<Vec<_>>()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut all = HashSet::new();
    for key in results.into_iter().flatten() {
        assert!(all.insert(key));
    }
    assert_eq!(all.len(), 1_000);
    assert_eq!(shared.emitted(), 1_000);
    assert!(!shared.is_exhausted());
}

#[derive(Clone, Default)]
struct WarnCounter(std::sync::Arc<std::sync::atomic::AtomicUsize>);

impl WarnCounter {
    fn count(&self) -> usize {
        self.0.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if *event.metadata().level() == tracing::Level::WARN {
            self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }
    }
}

#[test]
fn exhaustion_warning_is_emitted_once() {
    use tracing_subscriber::layer::SubscriberExt as _;

    let warns = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(warns.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut sampler = TaskSampler::seeded(9);
        sampler.state.seen.extend(all_keys());
        assert_eq!(warns.count(), 0);

        sampler.sample();
        assert_eq!(warns.count(), 1);

        for _ in 0..10 {
            sampler.sample();
        }
        assert_eq!(warns.count(), 1);
        assert!(sampler.state().is_exhausted());
    });
}

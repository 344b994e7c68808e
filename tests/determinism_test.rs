use kestrel::fixed_math::{FixedNum, FixedVec2, ONE};
use kestrel::sod::{update_batch, update_sods, Sod, SodCurve, SodState};
use kestrel::sweep::{sweep_circle_vs_circle, sweep_point_vs_capsule, sweep_point_vs_rect};
use kestrel::{Capsule, Circle, Rect};

fn random_fixed(rng: &mut fastrand::Rng, range: std::ops::Range<i64>) -> FixedNum {
    FixedNum::from_bits(rng.i64(range))
}

fn random_vec(rng: &mut fastrand::Rng, bound: i64) -> FixedVec2 {
    let bits = bound << 16;
    FixedVec2::new(random_fixed(rng, -bits..bits), random_fixed(rng, -bits..bits))
}

#[test]
fn test_sod_replay_is_bit_identical() {
    let mut rng = fastrand::Rng::with_seed(42);
    let curve = SodCurve::new(FixedNum::from_num(2.5), FixedNum::from_num(0.4), FixedNum::from_num(1.2));

    let mut a = SodState::new(FixedVec2::ZERO);
    let mut b = SodState::new(FixedVec2::ZERO);

    for step in 0..2000 {
        if step % 97 == 0 {
            let target = random_vec(&mut rng, 50);
            a.target = target;
            b.target = target;
        }
        // Frame times between 0 and 0.05 s
        let dt = random_fixed(&mut rng, 0..3277);

        let va = a.update(&curve, dt);
        let vb = b.update(&curve, dt);
        assert_eq!(va, vb, "Diverged at step {}", step);
    }

    assert_eq!(a, b);
}

#[test]
fn test_sod_converges_to_target() {
    let curve = SodCurve::new(ONE, ONE, ONE);
    let mut sod = Sod::new(curve, FixedNum::ZERO);
    sod.reset(FixedNum::ZERO, true, true);
    sod.set_target(ONE);

    let dt = FixedNum::from_num(0.01);
    for _ in 0..500 {
        sod.update(dt);
    }

    let error = (sod.value() - ONE).abs();
    assert!(error < FixedNum::from_num(0.01), "Value {:?} did not settle on 1", sod.value());
}

#[test]
fn test_batch_matches_sequential_updates() {
    let mut rng = fastrand::Rng::with_seed(7);
    let curve = SodCurve::new(FixedNum::from_num(1.5), FixedNum::from_num(0.8), FixedNum::ZERO);

    let mut batch: Vec<SodState<FixedVec2>> = (0..500)
        .map(|_| {
            let mut state = SodState::new(random_vec(&mut rng, 100));
            state.target = random_vec(&mut rng, 100);
            state
        })
        .collect();
    let mut sequential = batch.clone();

    let mut sods: Vec<Sod<FixedNum>> = (0..200)
        .map(|i| {
            let frequency = FixedNum::from_num(1 + i % 5);
            let mut sod = Sod::new(SodCurve::new(frequency, ONE, FixedNum::ZERO), FixedNum::ZERO);
            sod.set_target(random_fixed(&mut rng, -(10 << 16)..(10 << 16)));
            sod
        })
        .collect();
    let mut sods_sequential = sods.clone();

    for _ in 0..100 {
        let dt = random_fixed(&mut rng, 0..2000);

        update_batch(&mut batch, &curve, dt);
        for state in &mut sequential {
            state.update(&curve, dt);
        }

        update_sods(&mut sods, dt);
        for sod in &mut sods_sequential {
            sod.update(dt);
        }
    }

    assert_eq!(batch, sequential);
    assert_eq!(sods, sods_sequential);
}

#[test]
fn test_sweeps_are_pure() {
    let mut rng = fastrand::Rng::with_seed(1234);

    for _ in 0..500 {
        let circle = Circle::new(random_vec(&mut rng, 20), random_fixed(&mut rng, (1 << 14)..(4 << 16)));
        let other = Circle::new(random_vec(&mut rng, 20), random_fixed(&mut rng, (1 << 14)..(4 << 16)));
        let rect = Rect::new(random_vec(&mut rng, 20), random_vec(&mut rng, 10));
        let capsule = Capsule::new(
            random_vec(&mut rng, 20),
            random_vec(&mut rng, 20),
            random_fixed(&mut rng, (1 << 14)..(4 << 16)),
        );
        let velocity = random_vec(&mut rng, 40);

        assert_eq!(
            sweep_circle_vs_circle(&circle, velocity, &other),
            sweep_circle_vs_circle(&circle, velocity, &other)
        );
        assert_eq!(
            sweep_point_vs_rect(circle.origin, velocity, &rect),
            sweep_point_vs_rect(circle.origin, velocity, &rect)
        );
        assert_eq!(
            sweep_point_vs_capsule(circle.origin, velocity, &capsule),
            sweep_point_vs_capsule(circle.origin, velocity, &capsule)
        );
    }
}

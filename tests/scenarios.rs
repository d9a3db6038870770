use fastrand::Rng;
use starfield::surface::Point;
use starfield::{DrawCommand, FieldSettings, Recorder, ShootingStar, Starfield};

fn field(width: f32, height: f32, seed: u64) -> Starfield {
    Starfield::with_rng(width, height, 0, FieldSettings::default(), Rng::with_seed(seed)).unwrap()
}

fn drawn_alphas(commands: &[DrawCommand]) -> Vec<f32> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillCircle { alpha, .. } | DrawCommand::StrokeLine { alpha, .. } => {
                Some(*alpha)
            }
            _ => None,
        })
        .collect()
}

#[test]
fn fresh_field_on_800_by_600() {
    let field = field(800.0, 600.0, 21);

    assert_eq!(field.stars().len(), 250);
    assert_eq!(field.stars().iter().filter(|s| s.is_moving()).count(), 15);
    for star in field.stars() {
        let p = star.position();
        assert!((0.0..800.0).contains(&p.x), "x = {}", p.x);
        assert!((0.0..600.0).contains(&p.y), "y = {}", p.y);
    }
}

#[test]
fn moving_count_is_independent_of_dimensions() {
    let mut field = field(800.0, 600.0, 2);
    for (w, h) in [(1.0, 1.0), (3840.0, 2160.0), (120.0, 80.0)] {
        field.resize(w, h);
        assert_eq!(field.stars().len(), 250);
        assert_eq!(field.stars().iter().filter(|s| s.is_moving()).count(), 15);
    }
}

#[test]
fn twinkle_and_wrap_hold_over_many_frames() {
    let mut field = field(200.0, 100.0, 8);
    let mut surface = Recorder::new(200.0, 100.0);

    for frame in 0..3_000u64 {
        field.frame(&mut surface, frame * 16);
        surface.take();
        for star in field.stars() {
            assert!(star.alpha() >= star.base_alpha() && star.alpha() <= 1.0);
            let p = star.position();
            assert!((0.0..=200.0).contains(&p.x) && (0.0..=100.0).contains(&p.y));
        }
    }
}

#[test]
fn shooting_star_fades_out_over_its_lifetime() {
    let mut field = field(2_000.0, 2_000.0, 5);
    field.launch(ShootingStar::new(Point::new(-20.0, -20.0), (6.0, 3.0), 100.0, 50.0));
    let mut surface = Recorder::new(2_000.0, 2_000.0);

    for life in 1..=50u32 {
        field.frame(&mut surface, 0);
        let streak = field.shooting_star().expect("still alive");
        assert_eq!(streak.life(), life);
        assert_eq!(streak.alpha(), 1.0 - life as f32 / 50.0);
        surface.take();
    }
    assert_eq!(field.shooting_star().map(ShootingStar::alpha), Some(0.0));

    field.frame(&mut surface, 0);
    assert!(field.shooting_star().is_none());

    let alphas = drawn_alphas(surface.commands());
    let streak_alphas = &alphas[alphas.len() - 2..];
    assert_eq!(streak_alphas, [0.0, 0.0]);
    assert!(alphas.iter().all(|a| *a >= 0.0));
}

#[test]
fn next_spawn_lands_two_to_six_seconds_after_destruction() {
    for seed in 0..50 {
        let mut field = field(800.0, 600.0, seed);
        field.launch(ShootingStar::new(Point::new(849.0, 0.0), (6.0, 3.0), 100.0, 50.0));

        let destroyed_at = 123_456;
        field.frame(&mut Recorder::new(800.0, 600.0), destroyed_at);

        assert!(field.shooting_star().is_none());
        let delay = field.next_spawn_at() - destroyed_at;
        assert!((2_000..6_000).contains(&delay), "delay {delay}");
    }
}

#[test]
fn shooting_stars_keep_coming() {
    let mut field = field(800.0, 600.0, 13);
    let mut surface = Recorder::new(800.0, 600.0);
    let mut spawned = 0;
    let mut active = false;

    // Ten simulated minutes at 60 fps.
    for frame in 0..36_000u64 {
        field.frame(&mut surface, frame * 1_000 / 60);
        surface.take();
        let now_active = field.shooting_star().is_some();
        if now_active && !active {
            spawned += 1;
        }
        active = now_active;
    }

    // At most one every ~2.7 s (2 s delay plus under a second of flight),
    // at least one every ~7 s.
    assert!((80..=230).contains(&spawned), "spawned {spawned}");
}

#[test]
fn resize_regenerates_field_but_keeps_shooting_star() {
    let mut field = field(800.0, 600.0, 17);
    let streak = ShootingStar::new(Point::new(300.0, 200.0), (8.0, 5.0), 110.0, 55.0);
    field.launch(streak.clone());

    field.resize(400.0, 300.0);

    assert_eq!(field.shooting_star(), Some(&streak));
    assert_eq!(field.stars().len(), 250);
    assert_eq!(field.stars().iter().filter(|s| s.is_moving()).count(), 15);
    for star in field.stars() {
        let p = star.position();
        assert!((0.0..400.0).contains(&p.x) && (0.0..300.0).contains(&p.y));
    }
}

use antigravity_engine::{category_badge, category_icon, category_letter, Intro};

fn with_floaters(intro: &mut Intro) {
    assert!(intro.add_measurement(category_letter(), 100.0, 100.0, 50.0, 60.0));
    assert!(intro.add_measurement(category_letter(), 160.0, 100.0, 50.0, 60.0));
    assert!(intro.add_measurement(category_icon(), 500.0, 300.0, 40.0, 40.0));
    assert!(intro.add_measurement(category_badge(), 300.0, 500.0, 140.0, 30.0));
}

#[test]
fn full_session_through_the_facade() {
    let mut intro = Intro::with_settings(r#"{"timeline":{"taglineText":"AGS"}}"#.to_string(), 1024.0, 768.0, 2, 5)
        .expect("settings parse");
    assert_eq!(intro.state(), 0);
    assert!(intro.particle_count() > 0);

    let early = intro.poll_cues_json(800.0);
    assert!(early.contains(r#"{"kind":"letterEntered","index":0}"#));

    let cues = intro.poll_cues_json(3000.0);
    assert!(cues.contains(r#"{"kind":"typed","text":"AGS"}"#));
    assert!(cues.contains(r#""kind":"antigravity""#));

    with_floaters(&mut intro);
    assert!(intro.enter_antigravity());
    assert_eq!(intro.state(), 1);
    assert_eq!(intro.body_count(), 4);

    for _ in 0..120 {
        assert!(intro.step());
    }
    let transforms = intro.body_transforms();
    assert_eq!(transforms.len(), 4 * Intro::body_stride());
    for body in transforms.chunks(Intro::body_stride()) {
        assert!(body[1] >= -1e-3 && body[1] <= 1024.0);
        assert!(body[2] >= -1e-3 && body[2] <= 768.0);
    }

    assert!(intro.enter_site(3500.0));
    assert_eq!(intro.state(), 2);
    assert!(intro.entered());
    assert!(intro.poll_cues_json(3500.0).contains("exiting"));
    assert!(intro.step());
    assert!(intro.poll_cues_json(4300.0).contains("hidden"));
    assert!(!intro.wants_next_frame());
}

#[test]
fn drag_through_the_facade() {
    let mut intro = Intro::new(1024.0, 768.0, 2, 9);
    with_floaters(&mut intro);
    intro.enter_antigravity();

    // Icon 2 covers 500..540 x 300..340.
    assert_eq!(intro.hit_test(520.0, 320.0), Some(2));
    assert_eq!(intro.pointer_down(520.0, 320.0, None), Some(2));
    assert_eq!(intro.dragging(), Some(2));
    assert!(intro.pointer_move(620.0, 320.0));
    assert_eq!(intro.pointer_up(), Some(2));
    assert_eq!(intro.dragging(), None);
}

#[test]
fn unknown_category_is_rejected() {
    let mut intro = Intro::new(800.0, 600.0, 0, 1);
    assert!(!intro.add_measurement(9, 0.0, 0.0, 10.0, 10.0));
    assert_eq!(intro.materialize(), 0);
}

#[test]
fn settings_round_trip_through_json() {
    let intro = Intro::new(800.0, 600.0, 0, 1);
    let json = intro.settings_json();
    let again = Intro::with_settings(json, 800.0, 600.0, 0, 1).expect("own settings parse");
    assert_eq!(again.settings_json(), intro.settings_json());
}

use antigravity_engine::Intro;

#[test]
fn perf_smoke_step() {
    let mut intro = Intro::new(1280.0, 720.0, 3, 11);
    intro.enable_perf_metrics(true);
    for i in 0..12 {
        assert!(intro.add_measurement((i % 3) as u8, 80.0 * i as f32, 200.0, 60.0, 40.0));
    }
    assert!(intro.enter_antigravity());
    intro.step();
    let stats = intro.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.bodies(), 12);
    assert_eq!(stats.pairs(), 66);
    assert_eq!(stats.particles(), intro.particle_count());
}

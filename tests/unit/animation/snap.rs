use super::*;

fn snap(from: f64, to: f64, ease: Ease) -> Snap {
    Snap {
        from,
        to,
        start: TimeMs(100),
        duration_ms: 200,
        ease,
    }
}

#[test]
fn samples_endpoints_exactly() {
    let s = snap(340.0, 0.0, Ease::OutCubic);
    assert_eq!(s.sample(TimeMs(100)), 340.0);
    assert_eq!(s.sample(TimeMs(300)), 0.0);
    assert_eq!(s.sample(TimeMs(10_000)), 0.0);
}

#[test]
fn holds_from_before_start() {
    let s = snap(10.0, 20.0, Ease::Linear);
    assert_eq!(s.sample(TimeMs(0)), 10.0);
    assert!(!s.is_done(TimeMs(0)));
}

#[test]
fn linear_midpoint_is_halfway() {
    let s = snap(0.0, 100.0, Ease::Linear);
    assert_eq!(s.sample(TimeMs(200)), 50.0);
    assert!(!s.is_done(TimeMs(200)));
    assert!(s.is_done(TimeMs(300)));
}

#[test]
fn out_cubic_leads_linear() {
    let lin = snap(0.0, 100.0, Ease::Linear);
    let out = snap(0.0, 100.0, Ease::OutCubic);
    assert!(out.sample(TimeMs(150)) > lin.sample(TimeMs(150)));
}

#[test]
fn settled_snap_is_constant() {
    let s = Snap::settled(42.0);
    assert_eq!(s.sample(TimeMs(0)), 42.0);
    assert_eq!(s.sample(TimeMs(5)), 42.0);
    assert!(s.is_done(TimeMs(0)));
}

use cosmian_leveled_logger::{infof, try_default_logger};

#[test]
#[should_panic(expected = "before `init` was called")]
fn test_convenience_surface_requires_init() {
    assert!(try_default_logger().is_none());
    infof!("nobody listens");
}

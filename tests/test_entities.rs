use space_invaders::entities::*;

#[test]
fn status_enums_compare() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert!(GameStatus::GameOver.is_terminal());
    assert!(GameStatus::GameClear.is_terminal());
    assert!(!GameStatus::Start.is_terminal());
    assert!(!GameStatus::Playing.is_terminal());
}

#[test]
fn bounds_mirror_entity() {
    let e = Entity::new(10, 20, 30, 40);
    assert_eq!(
        bounds(&e),
        Rect { x: 10, y: 20, width: 30, height: 40 }
    );
    assert_eq!(e.bottom(), 60);
    assert_eq!(e.center_x(), 25);
}

#[test]
fn overlapping_boxes_intersect() {
    let a = Entity::new(0, 0, 10, 10);
    let b = Entity::new(9, 9, 10, 10);
    assert!(intersects(&a, &b));
    assert!(intersects(&b, &a));
}

#[test]
fn touching_edges_do_not_intersect() {
    let a = Entity::new(0, 0, 10, 10);
    let right = Entity::new(10, 0, 10, 10);
    let below = Entity::new(0, 10, 10, 10);
    assert!(!intersects(&a, &right));
    assert!(!intersects(&a, &below));
}

#[test]
fn contained_box_intersects() {
    let outer = Entity::new(0, 0, 100, 100);
    let inner = Entity::new(40, 40, 4, 10);
    assert!(intersects(&outer, &inner));
}

#[test]
fn empty_box_never_intersects() {
    let a = Entity::new(0, 0, 10, 10);
    let flat = Entity::new(5, 5, 0, 3);
    assert!(!intersects(&a, &flat));
}

#[test]
fn projectile_owner_follows_speed_sign() {
    let up = Projectile { body: Entity::new(0, 0, 4, 10), speed: 8 };
    let down = Projectile { body: Entity::new(0, 0, 4, 10), speed: -6 };
    assert_eq!(up.owner(), ProjectileOwner::Player);
    assert_eq!(down.owner(), ProjectileOwner::Enemy);
}

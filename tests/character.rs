use pipe_runner::character::Character;
use strum::IntoEnumIterator;

#[test]
fn ids_parse_case_insensitively() {
    assert_eq!(Character::from_id("sonic"), Character::Sonic);
    assert_eq!(Character::from_id("HORNET"), Character::Hornet);
    assert_eq!(Character::from_id(" link "), Character::Link);
}

#[test]
fn unknown_id_falls_back_to_mario() {
    assert_eq!(Character::from_id("peach"), Character::Mario);
    assert_eq!(Character::from_id(""), Character::Mario);
}

#[test]
fn ids_round_trip() {
    for c in Character::iter() {
        assert_eq!(Character::from_id(c.id()), c);
    }
}

#[test]
fn only_the_bugs_face_left() {
    let left: Vec<_> = Character::iter().filter(|c| c.faces_left()).collect();
    assert_eq!(left, vec![Character::Hollow, Character::Hornet]);
}

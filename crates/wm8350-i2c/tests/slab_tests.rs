use wm8350_i2c::Slab;

#[test]
fn insert_until_full() {
    let mut slab: Slab<u32, 2> = Slab::new();
    assert!(slab.is_empty());

    let (a, _) = slab.insert(10).unwrap();
    let (b, _) = slab.insert(20).unwrap();
    assert_eq!(slab.insert(30).unwrap_err(), 30);

    assert_eq!(slab.len(), 2);
    assert_eq!(slab.get(a), Some(&10));
    assert_eq!(slab.get(b), Some(&20));
}

#[test]
fn removed_id_goes_stale() {
    let mut slab: Slab<u32, 1> = Slab::new();

    let (old, _) = slab.insert(1).unwrap();
    assert_eq!(slab.remove(old), Some(1));
    let (new, value) = slab.insert(2).unwrap();
    *value += 1;

    assert_ne!(old, new);
    assert!(!slab.contains(old));
    assert_eq!(slab.get(old), None);
    assert_eq!(slab.remove(old), None);
    assert_eq!(slab.get(new), Some(&3));
    assert_eq!(slab.len(), 1);
}

#[test]
fn id_from_other_slab_is_rejected() {
    let mut first: Slab<u32, 1> = Slab::new();
    let mut second: Slab<u32, 1> = Slab::new();

    let (id, _) = first.insert(1).unwrap();
    second.insert(2).unwrap();

    assert!(!second.contains(id));
    assert_eq!(second.get_mut(id), None);
    assert_eq!(second.remove(id), None);
    assert_eq!(second.len(), 1);
    assert_eq!(first.get(id), Some(&1));
}

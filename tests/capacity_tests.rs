use growbuf::{BufState, Global, GrowBuf, NoHooks};

#[test]
fn test_resize_grows_capacity() {
    let mut alloc = Global;
    let mut hooks = NoHooks;

    let mut buf: GrowBuf<u32> = GrowBuf::with_capacity(4, &mut alloc, &mut hooks);
    buf.insert_after(0, &[1, 2, 3], &mut alloc, &mut hooks)
        .unwrap();

    buf.resize(32, &mut alloc, &mut hooks).unwrap();

    assert_eq!(buf.capacity(), 32);
    assert_eq!(buf.as_slice(), &[1, 2, 3]);

    buf.destroy(&mut alloc);
}

#[test]
fn test_resize_same_capacity_is_noop() {
    let mut alloc = Global;
    let mut hooks = NoHooks;

    let mut buf: GrowBuf<u32> = GrowBuf::with_capacity(4, &mut alloc, &mut hooks);
    let before = buf.as_slice().as_ptr();

    buf.resize(4, &mut alloc, &mut hooks).unwrap();

    assert_eq!(buf.capacity(), 4);
    assert_eq!(buf.as_slice().as_ptr(), before);

    buf.destroy(&mut alloc);
}

#[test]
fn test_resize_shrink_clamps_length() {
    let mut alloc = Global;
    let mut hooks = NoHooks;

    let mut buf: GrowBuf<u32> = GrowBuf::with_capacity(8, &mut alloc, &mut hooks);
    buf.insert_after(0, &[1, 2, 3, 4, 5], &mut alloc, &mut hooks)
        .unwrap();

    buf.resize(3, &mut alloc, &mut hooks).unwrap();

    assert_eq!(buf.capacity(), 3);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_slice(), &[1, 2, 3]);
    assert_eq!(buf.state(), BufState::Full);

    buf.destroy(&mut alloc);
}

#[test]
fn test_resize_to_zero_releases() {
    let mut alloc = Global;
    let mut hooks = NoHooks;

    let mut buf: GrowBuf<u32> = GrowBuf::with_capacity(8, &mut alloc, &mut hooks);
    buf.insert_after(0, &[1, 2, 3], &mut alloc, &mut hooks)
        .unwrap();

    buf.resize(0, &mut alloc, &mut hooks).unwrap();

    assert_eq!(buf.state(), BufState::Null);
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 0);
}

#[test]
fn test_resize_from_null_allocates() {
    let mut alloc = Global;
    let mut hooks = NoHooks;

    let mut buf: GrowBuf<u32> = GrowBuf::null();
    buf.resize(8, &mut alloc, &mut hooks).unwrap();

    assert_eq!(buf.state(), BufState::Empty);
    assert_eq!(buf.capacity(), 8);

    buf.destroy(&mut alloc);
}

#[test]
fn test_grow_by_and_shrink_by() {
    let mut alloc = Global;
    let mut hooks = NoHooks;

    let mut buf: GrowBuf<u32> = GrowBuf::with_capacity(4, &mut alloc, &mut hooks);

    buf.grow_by(6, &mut alloc, &mut hooks).unwrap();
    assert_eq!(buf.capacity(), 10);

    buf.shrink_by(3, &mut alloc, &mut hooks).unwrap();
    assert_eq!(buf.capacity(), 7);

    buf.shrink_by(7, &mut alloc, &mut hooks).unwrap();
    assert_eq!(buf.state(), BufState::Null);
}

// The buffer contract treats wrapping size arithmetic as invalid input, not
// as an allocator failure: the operation is a silent no-op with no callback.
// These tests document the policy rather than endorse it.
#[test]
fn test_overflow_is_silent() {
    let mut alloc = Global;
    let mut hooks = NoHooks;

    let buf: GrowBuf<u32> = GrowBuf::with_capacity(usize::MAX, &mut alloc, &mut hooks);
    assert_eq!(buf.state(), BufState::Null);

    let mut buf: GrowBuf<u32> = GrowBuf::with_capacity(4, &mut alloc, &mut hooks);

    // Byte size of the target capacity would overflow.
    buf.resize(usize::MAX / 2, &mut alloc, &mut hooks).unwrap();
    assert_eq!(buf.capacity(), 4);

    // The addition itself wraps.
    buf.grow_by(usize::MAX, &mut alloc, &mut hooks).unwrap();
    assert_eq!(buf.capacity(), 4);

    // The subtraction itself wraps.
    buf.shrink_by(5, &mut alloc, &mut hooks).unwrap();
    assert_eq!(buf.capacity(), 4);

    buf.destroy(&mut alloc);
}

#[test]
fn test_shrink_to_exact_length_keeps_elements() {
    let mut alloc = Global;
    let mut hooks = NoHooks;

    let mut buf: GrowBuf<String> = GrowBuf::with_capacity(10, &mut alloc, &mut hooks);
    buf.insert_after(
        0,
        &["a".to_string(), "b".to_string(), "c".to_string()],
        &mut alloc,
        &mut hooks,
    )
    .unwrap();

    buf.shrink_by(7, &mut alloc, &mut hooks).unwrap();

    assert_eq!(buf.capacity(), 3);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.get(2).map(String::as_str), Some("c"));

    buf.destroy(&mut alloc);
}

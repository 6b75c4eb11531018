use streams::{Stream, StreamErr};

#[test]
fn reads_in_write_order() {
    const LEN: usize = 4;

    let mut s = Stream::new();
    for x in 0..LEN {
        s.write(x);
    }

    assert_eq!(s.len(), LEN);
    for x in 0..LEN {
        assert_eq!(s.read(), Ok(x));
    }
    assert!(s.is_empty());
}

#[test]
fn read_past_end_underflows() {
    let mut s: Stream<f32> = Stream::new();
    s.write(1.0);

    assert_eq!(s.read(), Ok(1.0));
    assert_eq!(s.read(), Err(StreamErr::Underflow));
}

#[test]
fn collects_and_extends() {
    let mut s: Stream<usize> = (0..3).collect();
    s.extend(3..5);

    assert_eq!(s.len(), 5);
    for x in 0..5 {
        assert_eq!(s.read(), Ok(x));
    }
}

use crate::error::{Error, ErrorKind};
use crate::test::builder::Builder;
use crate::{from_bytes, Tag, Value};

// Given a v: Value, a key: str, and a pattern, check the value is a compound
// with that key and its value matches the pattern. Optionally add a condition
// for the matched value.
macro_rules! assert_contains {
    ($v:ident, $key:expr, $p:pat) => {
        if let Value::Compound(v) = &$v {
            match v[$key] {
                $p => {}
                _ => panic!("expected Some({}), got {:?}", stringify!($p), v.get($key)),
            }
        } else {
            panic!("expected compound");
        }
    };
    ($v:ident, $key:expr, $p:pat, $check:expr) => {
        if let Value::Compound(v) = &$v {
            match v[$key] {
                $p => assert!($check),
                _ => panic!("expected Some({}), got {:?}", stringify!($p), v.get($key)),
            }
        } else {
            panic!("expected compound");
        }
    };
}

#[test]
fn error_impls_sync_send() {
    fn i<T: Clone + Send + Sync + std::error::Error>(_: T) {}
    i(Error::invalid_tag(1));
}

#[test]
fn distinguish_byte() {
    let input = Builder::new()
        .start_compound("")
        .byte("a", 123)
        .byte("b", -123)
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(v, "a", Value::Byte(123));
    assert_contains!(v, "b", Value::Byte(-123));
}

#[test]
fn distinguish_short() {
    let input = Builder::new()
        .start_compound("")
        .short("a", 1)
        .short("b", 1000)
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(v, "a", Value::Short(1));
    assert_contains!(v, "b", Value::Short(1000));
}

#[test]
fn distinguish_int() {
    let input = Builder::new()
        .start_compound("")
        .int("a", 1)
        .int("b", 1_000_000)
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(v, "a", Value::Int(1));
    assert_contains!(v, "b", Value::Int(1_000_000));
}

#[test]
fn distinguish_long() {
    let input = Builder::new()
        .start_compound("")
        .long("a", 1)
        .long("b", 10_000_000_000)
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(v, "a", Value::Long(1));
    assert_contains!(v, "b", Value::Long(10_000_000_000));
}

#[test]
fn distinguish_floats() {
    let input = Builder::new()
        .start_compound("")
        .float("a", 1.23)
        .double("b", 3.21)
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(v, "a", Value::Float(f), f == 1.23);
    assert_contains!(v, "b", Value::Double(f), f == 3.21);
}

#[test]
fn distinguish_string() {
    let input = Builder::new()
        .start_compound("")
        .string("a", "hello")
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(v, "a", Value::String(ref s), s == "hello");
}

#[test]
fn distinguish_arrays() {
    let input = Builder::new()
        .start_compound("")
        .byte_array("a", &[1, 2, 3])
        .int_array("b", &[4, 5, 6])
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(
        v,
        "a",
        Value::ByteArray(ref data),
        data.iter().eq(&[1, 2, 3])
    );
    assert_contains!(
        v,
        "b",
        Value::IntArray(ref data),
        data.iter().eq(&[4, 5, 6])
    );
}

#[test]
fn distinguish_lists() {
    let input = Builder::new()
        .start_compound("")
        .start_list("a", Tag::Byte, 3)
        .byte_payload(1)
        .byte_payload(2)
        .byte_payload(3)
        .start_list("b", Tag::Int, 3)
        .int_payload(1)
        .int_payload(2)
        .int_payload(3)
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(
        v,
        "a",
        Value::List(ref data),
        data.iter()
            .eq(&[Value::Byte(1), Value::Byte(2), Value::Byte(3)])
    );
    assert_contains!(
        v,
        "b",
        Value::List(ref data),
        data.iter().eq(&[Value::Int(1), Value::Int(2), Value::Int(3)])
    );
}

#[test]
fn distinguish_compound() {
    let input = Builder::new()
        .start_compound("")
        .start_compound("a")
        .end_compound()
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(v, "a", Value::Compound(_));
}

#[test]
fn root_name_surfaces() {
    let input = Builder::new()
        .start_compound("Level")
        .end_compound()
        .build();

    let (name, v) = from_bytes(&input).unwrap();
    assert_eq!(name, "Level");
    assert_eq!(v, Value::Compound(crate::Compound::new()));
}

#[test]
fn scalar_root() {
    let input = Builder::new().int("answer", 42).build();

    let (name, v) = from_bytes(&input).unwrap();
    assert_eq!(name, "answer");
    assert_eq!(v, Value::Int(42));
}

#[test]
fn int_decodes_big_endian_independent_of_host() {
    let input = Builder::new()
        .tag(Tag::Int)
        .name("v")
        .raw_bytes(&[0, 0, 1, 0])
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_eq!(v, Value::Int(256));
}

#[test]
fn empty_compound_is_single_end_byte() {
    let input = Builder::new().start_compound("").end_compound().build();

    let (_, v) = from_bytes(&input).unwrap();
    match v {
        Value::Compound(c) => assert_eq!(c.len(), 0),
        _ => panic!("expected compound"),
    }
}

#[test]
fn string_consumes_exactly_declared_bytes() {
    // A 5-byte string followed by another member proves the cursor lands
    // exactly after the declared bytes.
    let input = Builder::new()
        .start_compound("")
        .string("s", "hello")
        .byte("after", 7)
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(v, "s", Value::String(ref s), s == "hello");
    assert_contains!(v, "after", Value::Byte(7));
}

#[test]
fn zero_length_string_consumes_nothing() {
    let input = Builder::new()
        .start_compound("")
        .string("s", "")
        .byte("after", 1)
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(v, "s", Value::String(ref s), s.is_empty());
    assert_contains!(v, "after", Value::Byte(1));
}

#[test]
fn trailing_bytes_after_root_ignored() {
    let input = Builder::new()
        .start_compound("")
        .byte("a", 1)
        .end_compound()
        .raw_bytes(&[0xde, 0xad, 0xbe, 0xef])
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(v, "a", Value::Byte(1));
}

#[test]
fn truncated_int_payload_fails() {
    let input = Builder::new().tag(Tag::Int).name("v").build();

    let res = from_bytes(&input);
    assert!(matches!(
        res.unwrap_err().kind(),
        ErrorKind::UnexpectedEof
    ));
}

#[test]
fn truncated_name_fails() {
    let input = Builder::new()
        .tag(Tag::Int)
        .raw_str_len(20)
        .raw_bytes(b"short")
        .build();

    assert!(from_bytes(&input).is_err());
}

#[test]
fn truncated_array_fails() {
    let input = Builder::new()
        .tag(Tag::ByteArray)
        .name("a")
        .int_payload(100)
        .raw_bytes(&[1, 2, 3])
        .build();

    assert!(from_bytes(&input).is_err());
}

#[test]
fn empty_input_fails() {
    let res = from_bytes(&[]);
    assert!(matches!(
        res.unwrap_err().kind(),
        ErrorKind::UnexpectedEof
    ));
}

#[test]
fn unknown_tag_at_root_fails() {
    // 12 is the first discriminant outside the format.
    let input = Builder::new().raw_bytes(&[12]).name("v").build();

    let res = from_bytes(&input);
    assert!(matches!(res.unwrap_err().kind(), ErrorKind::InvalidTag));
}

#[test]
fn unknown_tag_inside_compound_fails() {
    let input = Builder::new()
        .start_compound("")
        .byte("ok", 1)
        .raw_bytes(&[99])
        .name("bad")
        .build();

    let res = from_bytes(&input);
    assert!(matches!(res.unwrap_err().kind(), ErrorKind::InvalidTag));
}

#[test]
fn unknown_list_element_tag_fails() {
    let input = Builder::new()
        .tag(Tag::List)
        .name("l")
        .raw_bytes(&[99])
        .int_payload(0)
        .build();

    let res = from_bytes(&input);
    assert!(matches!(res.unwrap_err().kind(), ErrorKind::InvalidTag));
}

#[test]
fn end_tag_at_root_fails() {
    let input = Builder::new().tag(Tag::End).build();

    let res = from_bytes(&input);
    assert!(matches!(res.unwrap_err().kind(), ErrorKind::InvalidTag));
}

#[test]
fn negative_byte_array_len_fails() {
    let input = Builder::new()
        .tag(Tag::ByteArray)
        .name("a")
        .int_payload(-1)
        .build();

    let res = from_bytes(&input);
    assert!(matches!(res.unwrap_err().kind(), ErrorKind::InvalidLength));
}

#[test]
fn negative_int_array_len_fails() {
    let input = Builder::new()
        .tag(Tag::IntArray)
        .name("a")
        .int_payload(-5)
        .build();

    let res = from_bytes(&input);
    assert!(matches!(res.unwrap_err().kind(), ErrorKind::InvalidLength));
}

#[test]
fn negative_list_len_fails() {
    let input = Builder::new()
        .start_list("l", Tag::Byte, -3)
        .build();

    let res = from_bytes(&input);
    assert!(matches!(res.unwrap_err().kind(), ErrorKind::InvalidLength));
}

#[test]
fn list_of_end_with_zero_len_is_empty_list() {
    // Empty lists are commonly written with an End element type.
    let input = Builder::new().start_list("l", Tag::End, 0).build();

    let (_, v) = from_bytes(&input).unwrap();
    match v {
        Value::List(l) => {
            assert_eq!(l.element_tag(), Tag::End);
            assert!(l.is_empty());
        }
        _ => panic!("expected list"),
    }
}

#[test]
fn list_of_end_with_nonzero_len_fails() {
    let input = Builder::new().start_list("l", Tag::End, 3).build();

    let res = from_bytes(&input);
    assert!(matches!(res.unwrap_err().kind(), ErrorKind::InvalidTag));
}

#[test]
fn nonunicode_string_fails() {
    let input = Builder::new()
        .tag(Tag::String)
        .name("s")
        .raw_str_len(1)
        .raw_bytes(&[0xff])
        .build();

    let res = from_bytes(&input);
    assert!(matches!(
        res.unwrap_err().kind(),
        ErrorKind::Nonunicode(_)
    ));
}

#[test]
fn deeply_nested_compounds_fail_cleanly() {
    let mut input = vec![];
    for _ in 0..600 {
        // Compound tag with an empty name, never terminated.
        input.extend_from_slice(&[10, 0, 0]);
    }

    let res = from_bytes(&input);
    assert!(matches!(res.unwrap_err().kind(), ErrorKind::DepthLimit));
}

#[test]
fn deeply_nested_lists_fail_cleanly() {
    // A named list of lists of lists of...
    let mut input = vec![9, 0, 0];
    for _ in 0..600 {
        // element type List, one element.
        input.extend_from_slice(&[9, 0, 0, 0, 1]);
    }

    let res = from_bytes(&input);
    assert!(matches!(res.unwrap_err().kind(), ErrorKind::DepthLimit));
}

#[test]
fn list_of_lists() {
    let input = Builder::new()
        .start_compound("")
        .start_list("outer", Tag::List, 2)
        .start_anon_list(Tag::Byte, 1)
        .byte_payload(1)
        .start_anon_list(Tag::Byte, 2)
        .byte_payload(2)
        .byte_payload(3)
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(
        v,
        "outer",
        Value::List(ref outer),
        outer.len() == 2
            && outer.get(0).and_then(Value::as_list).map(|l| l.len()) == Some(1)
            && outer.get(1).and_then(Value::as_list).map(|l| l.len()) == Some(2)
    );
}

#[test]
fn nested_list_of_compounds() {
    let input = Builder::new()
        .start_compound("")
        .start_list("entries", Tag::Compound, 2)
        .start_anon_compound()
        .byte("id", 1)
        .end_anon_compound()
        .start_anon_compound()
        .byte("id", 2)
        .end_anon_compound()
        .end_compound()
        .build();

    let (_, v) = from_bytes(&input).unwrap();
    assert_contains!(
        v,
        "entries",
        Value::List(ref l),
        l.len() == 2
            && l.iter()
                .enumerate()
                .all(|(i, e)| e.as_compound().map(|c| c.byte("id")) == Some(i as i8 + 1))
    );
}

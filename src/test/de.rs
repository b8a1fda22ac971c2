use crate::error::ErrorKind;
use crate::test::builder::Builder;
use crate::{from_bytes, from_reader_named, Flags, Registry, Tag, Value};

fn registry() -> Registry {
    Registry::new()
}

#[test]
fn simple_scalars() {
    let payload = Builder::new()
        .start_compound("")
        .byte("b", -5)
        .short("s", 1234)
        .int("i", -1_000_000)
        .long("l", i64::MAX)
        .float("f", 1.5)
        .double("d", -2.25)
        .char("c", 0x2603)
        .boolean("flags", 0b0000_0001)
        .string("str", "hello")
        .end_compound()
        .build();

    let root = from_bytes(&payload, &registry()).unwrap();

    assert_eq!(root.get("b"), Some(&Value::Byte(-5)));
    assert_eq!(root.get("s"), Some(&Value::Short(1234)));
    assert_eq!(root.get("i"), Some(&Value::Int(-1_000_000)));
    assert_eq!(root.get("l"), Some(&Value::Long(i64::MAX)));
    assert_eq!(root.get("f"), Some(&Value::Float(1.5)));
    assert_eq!(root.get("d"), Some(&Value::Double(-2.25)));
    assert_eq!(root.get("c"), Some(&Value::Char(0x2603)));
    assert_eq!(
        root.get("flags"),
        Some(&Value::Boolean(Flags::new(&[true])))
    );
    assert_eq!(root.get("str"), Some(&Value::String("hello".into())));
}

#[test]
fn arrays() {
    let payload = Builder::new()
        .start_compound("")
        .byte_array("bytes", &[-1, 0, 1])
        .short_array("shorts", &[i16::MIN, i16::MAX])
        .int_array("ints", &[1, 2, 3])
        .long_array("longs", &[i64::MIN])
        .float_array("floats", &[0.5, -0.5])
        .double_array("doubles", &[])
        .char_array("chars", &[0x41, 0x42])
        .boolean_array("bools", &[true, false, true])
        .end_compound()
        .build();

    let root = from_bytes(&payload, &registry()).unwrap();

    assert_eq!(root.get("bytes"), Some(&Value::ByteArray(vec![-1, 0, 1])));
    assert_eq!(
        root.get("shorts"),
        Some(&Value::ShortArray(vec![i16::MIN, i16::MAX]))
    );
    assert_eq!(root.get("ints"), Some(&Value::IntArray(vec![1, 2, 3])));
    assert_eq!(root.get("longs"), Some(&Value::LongArray(vec![i64::MIN])));
    assert_eq!(root.get("floats"), Some(&Value::FloatArray(vec![0.5, -0.5])));
    assert_eq!(root.get("doubles"), Some(&Value::DoubleArray(vec![])));
    assert_eq!(root.get("chars"), Some(&Value::CharArray(vec![0x41, 0x42])));
    assert_eq!(
        root.get("bools"),
        Some(&Value::BooleanArray(vec![true, false, true]))
    );
}

#[test]
fn packed_boolean_array_bit_order() {
    // [t,f,t,t,f,f,f,t] packs to 0b1000_1101 with bit 0 the first element.
    let payload = Builder::new()
        .start_compound("")
        .packed_boolean_array("packed", 8, &[0b1000_1101])
        .end_compound()
        .build();

    let root = from_bytes(&payload, &registry()).unwrap();

    match root.get("packed") {
        Some(Value::PackedBooleanArray(arr)) => {
            let expected = [true, false, true, true, false, false, false, true];
            assert_eq!(arr.len(), 8);
            assert_eq!(arr.iter().collect::<Vec<_>>(), expected);
        }
        other => panic!("expected packed boolean array, got {:?}", other),
    }
}

#[test]
fn packed_boolean_array_stray_high_bits_masked() {
    // 3 elements but the writer left garbage in the unused bits.
    let payload = Builder::new()
        .start_compound("")
        .packed_boolean_array("packed", 3, &[0b1111_1101])
        .end_compound()
        .build();

    let root = from_bytes(&payload, &registry()).unwrap();

    match root.get("packed") {
        Some(Value::PackedBooleanArray(arr)) => {
            assert_eq!(arr.len(), 3);
            assert_eq!(arr.as_bytes(), &[0b0000_0101]);
            assert_eq!(arr.iter().collect::<Vec<_>>(), [true, false, true]);
        }
        other => panic!("expected packed boolean array, got {:?}", other),
    }
}

#[test]
fn nested_compound() {
    let payload = Builder::new()
        .start_compound("")
        .start_compound("inner")
        .int("x", 1)
        .end_compound()
        .end_compound()
        .build();

    let root = from_bytes(&payload, &registry()).unwrap();

    match root.get("inner") {
        Some(Value::Compound(inner)) => assert_eq!(inner.get("x"), Some(&Value::Int(1))),
        other => panic!("expected compound, got {:?}", other),
    }
}

#[test]
fn empty_compound() {
    let payload = Builder::new().start_compound("").end_compound().build();
    let root = from_bytes(&payload, &registry()).unwrap();
    assert!(root.is_empty());
}

#[test]
fn list_of_ints() {
    let payload = Builder::new()
        .start_compound("")
        .start_list("ns", Tag::Int, 3)
        .int_payload(1)
        .int_payload(2)
        .int_payload(3)
        .end_compound()
        .build();

    let root = from_bytes(&payload, &registry()).unwrap();

    match root.get("ns") {
        Some(Value::List(list)) => {
            assert_eq!(list.element_id(), u8::from(Tag::Int));
            assert_eq!(
                list.values(),
                &[Value::Int(1), Value::Int(2), Value::Int(3)]
            );
        }
        other => panic!("expected list, got {:?}", other),
    }
}

#[test]
fn list_of_compounds() {
    let payload = Builder::new()
        .start_compound("")
        .start_list("cs", Tag::Compound, 2)
        .int("x", 1)
        .end_compound()
        .int("x", 2)
        .end_compound()
        .end_compound()
        .build();

    let root = from_bytes(&payload, &registry()).unwrap();

    match root.get("cs") {
        Some(Value::List(list)) => {
            assert_eq!(list.len(), 2);
            match list.get(1) {
                Some(Value::Compound(c)) => assert_eq!(c.get("x"), Some(&Value::Int(2))),
                other => panic!("expected compound element, got {:?}", other),
            }
        }
        other => panic!("expected list, got {:?}", other),
    }
}

#[test]
fn empty_list_placeholder_not_resolved() {
    // The element id of an empty list is a placeholder; even an id that no
    // registry knows must be accepted when the count is zero.
    let payload = Builder::new()
        .start_compound("")
        .tag(Tag::List)
        .name("empty")
        .raw_tag(250)
        .int_payload(0)
        .end_compound()
        .build();

    let root = from_bytes(&payload, &registry()).unwrap();

    match root.get("empty") {
        Some(Value::List(list)) => {
            assert!(list.is_empty());
            assert_eq!(list.element_id(), u8::from(Tag::End));
        }
        other => panic!("expected list, got {:?}", other),
    }
}

#[test]
fn set_duplicates_collapse_on_read() {
    // A foreign writer produced a set with duplicates; first occurrence
    // wins.
    let payload = Builder::new()
        .start_compound("")
        .start_set("s", Tag::Int, 4)
        .int_payload(7)
        .int_payload(1)
        .int_payload(7)
        .int_payload(2)
        .end_compound()
        .build();

    let root = from_bytes(&payload, &registry()).unwrap();

    match root.get("s") {
        Some(Value::Set(set)) => {
            assert_eq!(
                set.values(),
                &[Value::Int(7), Value::Int(1), Value::Int(2)]
            );
        }
        other => panic!("expected set, got {:?}", other),
    }
}

#[test]
fn root_name_preserved() {
    let payload = Builder::new()
        .start_compound("level")
        .int("x", 1)
        .end_compound()
        .build();

    let (name, root) = from_reader_named(payload.as_slice(), &registry()).unwrap();
    assert_eq!(name, "level");
    assert_eq!(root.get("x"), Some(&Value::Int(1)));
}

#[test]
fn trailing_bytes_ignored() {
    let payload = Builder::new()
        .start_compound("")
        .int("x", 1)
        .end_compound()
        .raw_bytes(&[1, 2, 3, 4])
        .build();

    let root = from_bytes(&payload, &registry()).unwrap();
    assert_eq!(root.get("x"), Some(&Value::Int(1)));
}

#[test]
fn unknown_type_id_fails_whole_read() {
    let payload = Builder::new()
        .start_compound("")
        .int("before", 1)
        .raw_tag(77)
        .name("mystery")
        .end_compound()
        .build();

    let err = from_bytes(&payload, &registry()).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::UnknownType(77));
}

#[test]
fn unknown_list_element_type_fails() {
    let payload = Builder::new()
        .start_compound("")
        .tag(Tag::List)
        .name("xs")
        .raw_tag(77)
        .int_payload(2)
        .end_compound()
        .build();

    let err = from_bytes(&payload, &registry()).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::UnknownType(77));
}

#[test]
fn truncated_payload() {
    let payload = Builder::new()
        .start_compound("")
        .tag(Tag::Long)
        .name("l")
        .raw_bytes(&[0, 1, 2]) // long needs 8 bytes
        .build();

    let err = from_bytes(&payload, &registry()).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn missing_end_terminator() {
    let payload = Builder::new().start_compound("").int("x", 1).build();

    let err = from_bytes(&payload, &registry()).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn negative_list_count() {
    let payload = Builder::new()
        .start_compound("")
        .start_list("xs", Tag::Int, -1)
        .end_compound()
        .build();

    let err = from_bytes(&payload, &registry()).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::Malformed);
}

#[test]
fn nonempty_end_typed_list() {
    let payload = Builder::new()
        .start_compound("")
        .start_list("xs", Tag::End, 3)
        .end_compound()
        .build();

    let err = from_bytes(&payload, &registry()).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::Malformed);
}

#[test]
fn root_must_be_compound() {
    let payload = Builder::new().tag(Tag::Int).name("").int_payload(1).build();

    let err = from_bytes(&payload, &registry()).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::Malformed);
}

#[test]
fn nesting_bomb_rejected() {
    let mut b = Builder::new().start_compound("");
    for _ in 0..600 {
        b = b.start_compound("a");
    }

    let err = from_bytes(&b.build(), &registry()).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::Malformed);
}

#[test]
fn string_with_nonunicode_bytes() {
    let payload = Builder::new()
        .start_compound("")
        .tag(Tag::String)
        .name("s")
        .raw_bytes(&[0, 2, 0xc0, 0x80]) // CESU-8 encoded NUL is fine
        .end_compound()
        .build();

    let root = from_bytes(&payload, &registry()).unwrap();
    assert_eq!(root.get("s"), Some(&Value::String("\0".into())));

    let payload = Builder::new()
        .start_compound("")
        .tag(Tag::String)
        .name("s")
        .raw_bytes(&[0, 2, 0xff, 0xff])
        .end_compound()
        .build();

    let err = from_bytes(&payload, &registry()).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Nonunicode(_)));
}

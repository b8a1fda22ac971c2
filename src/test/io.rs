use crate::{io, Compound, CompoundBuilder, Compression, Flags, Registry, Value};

fn roundtrip(compression: Compression) {
    let registry = Registry::new();

    let mut inner = Compound::new();
    inner.insert("depth", 2i32);

    let mut root = Compound::new();
    root.insert("greeting", "hello");
    root.insert("inner", inner);

    let mut buf = vec![];
    io::write(&mut buf, &root, compression).unwrap();

    let read_back = io::read(buf.as_slice(), compression, &registry).unwrap();
    assert_eq!(root, read_back);
}

#[test]
fn roundtrip_uncompressed() {
    roundtrip(Compression::None);
}

#[test]
fn roundtrip_gzip() {
    roundtrip(Compression::Gzip);
}

#[test]
fn roundtrip_zlib() {
    roundtrip(Compression::Zlib);
}

#[test]
fn gzip_output_is_gzip() {
    let mut root = Compound::new();
    root.insert("x", 1i32);

    let mut buf = vec![];
    io::write(&mut buf, &root, Compression::Gzip).unwrap();

    // GZip magic bytes.
    assert_eq!(&buf[..2], &[0x1f, 0x8b]);
}

#[test]
fn trailing_bytes_after_document_ignored() {
    let registry = Registry::new();

    let mut root = Compound::new();
    root.insert("x", 1i32);

    let mut buf = vec![];
    io::write(&mut buf, &root, Compression::None).unwrap();
    buf.extend_from_slice(b"junk");

    let read_back = io::read(buf.as_slice(), Compression::None, &registry).unwrap();
    assert_eq!(root, read_back);
}

#[test]
fn corrupt_compressed_stream_fails() {
    let registry = Registry::new();
    let err = io::read(&b"not gzip at all"[..], Compression::Gzip, &registry);
    assert!(err.is_err());
}

// The end-to-end scenario: build, write, read, assert field by field.
#[test]
fn end_to_end_document() {
    let registry = Registry::new();

    let root = CompoundBuilder::new()
        .string("Name", "Test")
        .int("Patch", 7)
        .boolean("Available", &[true, false, false])
        .build();

    for compression in [Compression::None, Compression::Gzip, Compression::Zlib] {
        let mut buf = vec![];
        io::write(&mut buf, &root, compression).unwrap();

        let read_back = io::read(buf.as_slice(), compression, &registry).unwrap();

        assert_eq!(read_back.get("Name"), Some(&Value::String("Test".into())));
        assert_eq!(read_back.get("Patch"), Some(&Value::Int(7)));
        assert_eq!(
            read_back.get("Available"),
            Some(&Value::Boolean(Flags::new(&[true, false, false])))
        );
        assert_eq!(read_back.get_as::<&str>("Name").unwrap(), "Test");
        assert_eq!(read_back.get_as::<i32>("Patch").unwrap(), 7);
        let available = read_back.get_as::<Flags>("Available").unwrap();
        assert!(available.get(0));
        assert!(!available.get(1));
        assert!(!available.get(2));
        assert_eq!(read_back, root);
    }
}

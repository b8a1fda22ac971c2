use crate::Tag;


#[allow(clippy::float_cmp)]
mod de;

mod io;



macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val as u8).unwrap(), Tag::$tag);
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
        Char = 13,
        Boolean = 14,
        Set = 15,
        ShortArray = 16,
        FloatArray = 17,
        DoubleArray = 18,
        CharArray = 19,
        BooleanArray = 20,
        PackedBooleanArray = 21,
    }

    for value in 22..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

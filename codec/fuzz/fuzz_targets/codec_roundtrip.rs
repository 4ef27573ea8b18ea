#![no_main]

use arbitrary::Arbitrary;
use bitsparrow::{Decoder, Encoder, Error, MAX_SAFE_INTEGER};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone)]
enum Field {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Size(u64),
    Bytes(Vec<u8>),
    String(String),
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    // A sequence of writes that must read back identically.
    Fields(Vec<Field>),
    // Arbitrary bytes read as a sequence of fields must never panic.
    Raw(Vec<u8>, Vec<Field>),
}

fn write(encoder: &mut Encoder, field: &Field) -> Result<(), Error> {
    match field {
        Field::U8(v) => encoder.uint8(*v),
        Field::U16(v) => encoder.uint16(*v),
        Field::U32(v) => encoder.uint32(*v),
        Field::U64(v) => encoder.uint64(*v),
        Field::I8(v) => encoder.int8(*v),
        Field::I16(v) => encoder.int16(*v),
        Field::I32(v) => encoder.int32(*v),
        Field::I64(v) => encoder.int64(*v),
        Field::F32(v) => encoder.float32(*v),
        Field::F64(v) => encoder.float64(*v),
        Field::Bool(v) => encoder.bool(*v),
        Field::Size(v) => encoder.size(*v)?,
        Field::Bytes(v) => encoder.bytes(v)?,
        Field::String(v) => encoder.string(v)?,
    };
    Ok(())
}

fn read_matches(decoder: &mut Decoder, field: &Field) -> Result<bool, Error> {
    Ok(match field {
        Field::U8(v) => decoder.uint8()? == *v,
        Field::U16(v) => decoder.uint16()? == *v,
        Field::U32(v) => decoder.uint32()? == *v,
        Field::U64(v) => decoder.uint64()? == *v,
        Field::I8(v) => decoder.int8()? == *v,
        Field::I16(v) => decoder.int16()? == *v,
        Field::I32(v) => decoder.int32()? == *v,
        Field::I64(v) => decoder.int64()? == *v,
        // Compare bit patterns to handle NaN
        Field::F32(v) => decoder.float32()?.to_bits() == v.to_bits(),
        Field::F64(v) => decoder.float64()?.to_bits() == v.to_bits(),
        Field::Bool(v) => decoder.bool()? == *v,
        Field::Size(v) => decoder.size()? == *v,
        Field::Bytes(v) => decoder.bytes()? == v[..],
        Field::String(v) => decoder.string()? == *v,
    })
}

fn roundtrip(fields: Vec<Field>) {
    // Sizes above the safe integer range are rejected on write.
    let fields: Vec<Field> = fields
        .into_iter()
        .filter(|field| match field {
            Field::Size(v) => *v <= MAX_SAFE_INTEGER,
            _ => true,
        })
        .collect();

    let mut encoder = Encoder::new();
    for field in &fields {
        write(&mut encoder, field).expect("Failed to encode field!");
    }
    let encoded = encoder.end();
    assert!(encoder.is_empty());

    let mut decoder = Decoder::new(encoded);
    for field in &fields {
        let matches = read_matches(&mut decoder, field).expect("Failed to decode field!");
        assert!(matches, "Decoded value differs for {field:?}");
    }
    assert!(decoder.end());
}

fn decode_raw(data: Vec<u8>, fields: Vec<Field>) {
    let len = data.len();
    let mut decoder = Decoder::new(data);
    for field in &fields {
        let before = decoder.position();
        if read_matches(&mut decoder, field).is_err() {
            // A failed read never moves the cursor.
            assert_eq!(decoder.position(), before);
            break;
        }
        assert!(decoder.position() <= len);
    }
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Fields(fields) => roundtrip(fields),
        FuzzInput::Raw(data, fields) => decode_raw(data, fields),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});

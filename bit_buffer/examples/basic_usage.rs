use bit_buffer::{BitBuffer, BitBufferError, Whence, pack};

fn main() {
    println!("=== Bit Buffer Examples ===\n");

    // Example 1: Packing a record with odd-sized fields
    let record = example_record();

    // Example 2: Decoding it again with a cursor
    if let Err(e) = example_decode(&record) {
        println!("  decode failed: {e}");
    }

    // Example 3: Bulk packing and shifting
    example_pack_and_shift();
}

fn example_record() -> BitBuffer {
    println!("Example 1: Sensor record (3-bit kind, 1-bit alarm, 12-bit reading)");

    let mut record = BitBuffer::new();
    record.append_fixed_width(5u8, 3);
    record.append_bit(true);
    record.append_fixed_width(2_345u16, 12);

    println!("  Bits:  {}", record);
    println!("  Bytes: {:02x?}", record.as_bytes());
    println!();

    record
}

fn example_decode(record: &BitBuffer) -> Result<(), BitBufferError> {
    println!("Example 2: Reading the record back");

    let mut cursor = record.cursor();
    let kind = cursor.read_bits(3)?;
    let alarm = cursor.read_bit();
    let reading = cursor.read_bits(12)?;
    println!("  kind={kind} alarm={alarm} reading={reading}");

    cursor.seek(12, Whence::End)?;
    println!("  reading again from the end: {}", cursor.read_bits(12)?);

    match cursor.read_bits(1) {
        Err(BitBufferError::EndOfInput) => println!("  cursor exhausted"),
        other => println!("  unexpected: {other:?}"),
    }
    println!();

    Ok(())
}

fn example_pack_and_shift() {
    println!("Example 3: Minimal-width packing");

    let mut buf = pack![1u8, 128u8, 23u8, vec![4u16, 1, 1]];
    println!("  Packed:  {} ({} bits)", buf, buf.len());

    buf.shift_left(9);
    println!("  Shifted: {} ({} bits)", buf, buf.len());
}

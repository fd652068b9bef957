use huffpack::{Codec, CodecConfig};
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let fp = env::args()
        .nth(1)
        .ok_or("Please provide path to input file as first argument.")?;
    let input_bytes = fs::read(&fp)?;

    let codec = Codec::new(CodecConfig::default().with_max_decoded_len(input_bytes.len() as u64));
    let packed_path = format!("{fp}.huf");

    // encode scope - save to file
    {
        let packed = codec.compress(&input_bytes);
        fs::write(&packed_path, &packed)?;
        println!(
            "{} -> {} ({} -> {} bytes)",
            fp,
            packed_path,
            input_bytes.len(),
            packed.len()
        );
    }

    // decode scope - read from file
    {
        let file_data = fs::read(&packed_path)?;
        let decoded = codec.decompress(&file_data)?;
        if decoded != input_bytes {
            return Err("decoded bytes differ from the input".into());
        }
        println!("verified round trip of {} bytes", decoded.len());
    }

    Ok(())
}

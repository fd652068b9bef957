use huffpack::{compress, decompress, CodeTable, FrequencyTable, HuffmanTree};

fn main() {
    let s = String::from("Hello my name is Sam!");

    let freqs = FrequencyTable::from_bytes(s.as_bytes());
    if let Some(tree) = HuffmanTree::build(&freqs) {
        let codes = CodeTable::from_tree(&tree);
        for (symbol, _) in codes.iter() {
            let code = codes.code_string(symbol).unwrap_or_default();
            println!("{:?} -> {}", symbol as char, code);
        }
    }

    let out = compress(s.as_bytes());
    let dec = decompress(&out).map(|b| String::from_utf8_lossy(&b).into_owned());

    println!("{} bytes -> {} bytes", s.len(), out.len());
    println!("{:?}", dec);
}

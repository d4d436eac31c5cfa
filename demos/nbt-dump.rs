use flate2::read::GzDecoder;
use nbtree::from_bytes;
use std::io;
use std::io::Read;

//
// This example dumps NBT from stdin with GZip compression, for example a
// level.dat or player dat file.
//

fn main() {
    let stdin = io::stdin();
    let mut decoder = GzDecoder::new(stdin);
    let mut buf = vec![];
    decoder.read_to_end(&mut buf).unwrap();

    let (name, value) = from_bytes(buf.as_slice()).unwrap();

    if !name.is_empty() {
        println!("root name: {:?}", name);
    }
    println!("{}", value);
}

use nbtree::{from_bytes, nbt, to_bytes, List, Tag};

//
// This example builds a small player-like structure in code, encodes it to
// its binary form and reads it back.
//

fn main() {
    let mut inventory = List::new(Tag::Compound);
    inventory.push(nbt!({"id": "torch", "count": 16_i8}));
    inventory.push(nbt!({"id": "bread", "count": 3_i8}));

    let player = nbt!({
        "name": "Steve",
        "health": 20.0_f32,
        "pos": [1.5, 64.0, -7.25],
        "inventory": inventory,
    });

    let payload = to_bytes("Player", &player).unwrap();
    println!("encoded {} bytes", payload.len());

    let (name, decoded) = from_bytes(&payload).unwrap();
    assert_eq!(decoded, player);

    println!("decoded {:?} back:", name);
    println!("{}", decoded);
}

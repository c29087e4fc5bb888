use std::io::Write;
use rand_srng::*;

// Streams raw generator output to stdout for statistical test suites, e.g.
// cargo run --release | RNG_test stdin16

fn main() -> std::io::Result<()> {

    let mut rnd = Srng::new();
    //let mut rnd = Srng::stream(0, 1);
    let mut stdout = std::io::stdout();

    let mut v: Vec<u8> = Vec::new();

    loop {
        // Full 16-bit halfwords.
        let z = rnd.next_halfword();
        v.extend_from_slice(&z.to_le_bytes());

        // Combined bytes before the halfword stage.
        //v.push(rnd.next_byte());

        if v.len() >= 0x10000 {
            stdout.write_all(v.as_slice())?;
            v.clear();
        }
    }
}

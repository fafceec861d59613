use turning_grille::core::block_codec::encode_block;
use turning_grille::core::rotation::rotate;
use turning_grille::{Grille, MessageProcessor, Position, RotationDirection, PAD_CHAR};

const DIRECTIONS: [RotationDirection; 2] =
    [RotationDirection::Clockwise, RotationDirection::CounterClockwise];

/// One hole per rotation orbit: each top-left quadrant cell turned `(r + c) % 4` times.
fn scattered_grille(size: usize, direction: RotationDirection) -> Grille {
    let half = size / 2;
    let mut holes = Vec::new();
    for r in 0..half {
        for c in 0..half {
            let mut p = Position::new(r, c);
            for _ in 0..(r + c) % 4 {
                p = rotate(p, size, direction);
            }
            holes.push(p);
        }
    }
    Grille::new(size, direction, holes)
}

#[test]
fn test_hello_world_scenario() {
    let holes = vec![
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(1, 0),
        Position::new(1, 1),
    ];
    let processor =
        MessageProcessor::new(Grille::new(4, RotationDirection::Clockwise, holes)).unwrap();

    let cipher = processor.encrypt("HELLOWORLD").unwrap();
    assert_eq!(cipher.text.len(), 16);
    assert_eq!(cipher.text, "HEOWLLORXXLDXXXX");

    let recovered = processor.decrypt(&cipher.text).unwrap();
    assert_eq!(recovered.text, "HELLOWORLDXXXXXX");
}

#[test]
fn test_round_trip_over_sizes_and_directions() {
    let message = "Sphinx of black quartz, judge my vow. Pack my box with five dozen liquor jugs!";
    let letters: String = message
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect();

    for size in [2, 4, 6, 8] {
        for direction in DIRECTIONS {
            let processor = MessageProcessor::new(scattered_grille(size, direction)).unwrap();
            let block_len = size * size;

            let cipher = processor.encrypt(message).unwrap();
            assert_eq!(cipher.text.len() % block_len, 0);
            assert_eq!(cipher.text.len(), letters.len().div_ceil(block_len) * block_len);

            let recovered = processor.decrypt(&cipher.text).unwrap();
            let mut expected = letters.clone();
            while expected.len() < cipher.text.len() {
                expected.push(PAD_CHAR);
            }
            assert_eq!(recovered.text, expected, "size={} direction={}", size, direction);
        }
    }
}

#[test]
fn test_block_is_a_permutation_of_its_chunk() {
    let grille = scattered_grille(6, RotationDirection::Clockwise).validate().unwrap();
    let chunk: Vec<char> = ('A'..='Z').chain('a'..='j').collect();
    let block = encode_block(&grille, &chunk, PAD_CHAR).unwrap();

    let mut encoded: Vec<char> = block.to_row_major_string().chars().collect();
    let mut original = chunk.clone();
    encoded.sort_unstable();
    original.sort_unstable();
    assert_eq!(encoded, original);
}

#[test]
fn test_direction_changes_ciphertext() {
    let cw = MessageProcessor::new(scattered_grille(4, RotationDirection::Clockwise)).unwrap();
    let ccw =
        MessageProcessor::new(scattered_grille(4, RotationDirection::CounterClockwise)).unwrap();
    let plain = "ABCDEFGHIJKLMNOP";
    assert_ne!(cw.encrypt(plain).unwrap().text, ccw.encrypt(plain).unwrap().text);
}

#[test]
fn test_one_by_one_grille_is_never_valid() {
    // The single cell is its own rotation, so it is visited four times.
    let grille = Grille::new(1, RotationDirection::Clockwise, vec![Position::new(0, 0)]);
    assert!(MessageProcessor::new(grille).is_err());
}

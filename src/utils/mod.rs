pub mod time;

/// Alphabet for generated ids, kept lowercase so ids stay readable in node ids like `agent-x3k9q2`.
const ID_ALPHABET: [char; 36] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9',
];

/// short random id used for palette-created nodes
pub fn shortid() -> String {
    nanoid::nanoid!(10, &ID_ALPHABET)
}

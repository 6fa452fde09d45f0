// Test fixtures with known texts, dictionary entries and expected outputs
// WHY: Golden-output testing requires deterministic input/output pairs

/// Dictionary in CMU format covering the fixture texts
pub const TEST_DICTIONARY: &str = ";;; Test dictionary
mat M AE1 T
bat B AE1 T
hat HH AE1 T
this DH IH1 S
coat K OW1 T
read R IY1 D
read(2) R EH1 D
bead B IY1 D
bed B EH1 D
world W ER1 L D
unfurled AH0 N F ER1 L D
";

/// Three sentences, two of which end in a T sound
pub const CAT_TEXT: &str = "The cat sat on the mat. I saw a bat. Nothing rhymes with this.";

/// Expected text output for CAT_TEXT at strength 1
pub const CAT_STRENGTH_ONE_EXPECTED: &str =
    "The cat sat on the mat.\n\tI saw a bat.\n\nI saw a bat.\n\tThe cat sat on the mat.\n\n";

/// Sentences spanning line breaks
pub const MULTILINE_TEXT: &str = "Brought death into
the world. Sing, heavenly
Muse, unfurled.";

/// Expected text output for MULTILINE_TEXT at strength 3
pub const MULTILINE_EXPECTED: &str = "Brought death intothe world.\n\tSing, heavenlyMuse, unfurled.\n\n\
Sing, heavenlyMuse, unfurled.\n\tBrought death intothe world.\n\n";

/// The same last word repeated, which never forms a couplet with itself
pub const REPEATED_WORD_TEXT: &str = "Sit on the mat. Stand on the MAT! Look at the hat.";

/// Last words only some of which the dictionary knows
pub const UNKNOWN_WORDS_TEXT: &str = "A jabberwock. A bandersnatch. Sit on the mat. Wear a hat.";

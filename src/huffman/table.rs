//! Huffman code tables for RFC 7541 Appendix B.
//!
//! Generated from the canonical code listing; do not edit by hand.

/// (code, length in bits) for each symbol; index 256 is EOS.
pub(crate) const ENCODE_TABLE: [(u32, u8); 257] = [
    (0x1ff8, 13),  // 0
    (0x7fffd8, 23),  // 1
    (0xfffffe2, 28),  // 2
    (0xfffffe3, 28),  // 3
    (0xfffffe4, 28),  // 4
    (0xfffffe5, 28),  // 5
    (0xfffffe6, 28),  // 6
    (0xfffffe7, 28),  // 7
    (0xfffffe8, 28),  // 8
    (0xffffea, 24),  // 9
    (0x3ffffffc, 30),  // 10
    (0xfffffe9, 28),  // 11
    (0xfffffea, 28),  // 12
    (0x3ffffffd, 30),  // 13
    (0xfffffeb, 28),  // 14
    (0xfffffec, 28),  // 15
    (0xfffffed, 28),  // 16
    (0xfffffee, 28),  // 17
    (0xfffffef, 28),  // 18
    (0xffffff0, 28),  // 19
    (0xffffff1, 28),  // 20
    (0xffffff2, 28),  // 21
    (0x3ffffffe, 30),  // 22
    (0xffffff3, 28),  // 23
    (0xffffff4, 28),  // 24
    (0xffffff5, 28),  // 25
    (0xffffff6, 28),  // 26
    (0xffffff7, 28),  // 27
    (0xffffff8, 28),  // 28
    (0xffffff9, 28),  // 29
    (0xffffffa, 28),  // 30
    (0xffffffb, 28),  // 31
    (0x14, 6),  // 32 ' '
    (0x3f8, 10),  // 33 '!'
    (0x3f9, 10),  // 34 '"'
    (0xffa, 12),  // 35 '#'
    (0x1ff9, 13),  // 36 '$'
    (0x15, 6),  // 37 '%'
    (0xf8, 8),  // 38 '&'
    (0x7fa, 11),  // 39 "'"
    (0x3fa, 10),  // 40 '('
    (0x3fb, 10),  // 41 ')'
    (0xf9, 8),  // 42 '*'
    (0x7fb, 11),  // 43 '+'
    (0xfa, 8),  // 44 ','
    (0x16, 6),  // 45 '-'
    (0x17, 6),  // 46 '.'
    (0x18, 6),  // 47 '/'
    (0x0, 5),  // 48 '0'
    (0x1, 5),  // 49 '1'
    (0x2, 5),  // 50 '2'
    (0x19, 6),  // 51 '3'
    (0x1a, 6),  // 52 '4'
    (0x1b, 6),  // 53 '5'
    (0x1c, 6),  // 54 '6'
    (0x1d, 6),  // 55 '7'
    (0x1e, 6),  // 56 '8'
    (0x1f, 6),  // 57 '9'
    (0x5c, 7),  // 58 ':'
    (0xfb, 8),  // 59 ';'
    (0x7ffc, 15),  // 60 '<'
    (0x20, 6),  // 61 '='
    (0xffb, 12),  // 62 '>'
    (0x3fc, 10),  // 63 '?'
    (0x1ffa, 13),  // 64 '@'
    (0x21, 6),  // 65 'A'
    (0x5d, 7),  // 66 'B'
    (0x5e, 7),  // 67 'C'
    (0x5f, 7),  // 68 'D'
    (0x60, 7),  // 69 'E'
    (0x61, 7),  // 70 'F'
    (0x62, 7),  // 71 'G'
    (0x63, 7),  // 72 'H'
    (0x64, 7),  // 73 'I'
    (0x65, 7),  // 74 'J'
    (0x66, 7),  // 75 'K'
    (0x67, 7),  // 76 'L'
    (0x68, 7),  // 77 'M'
    (0x69, 7),  // 78 'N'
    (0x6a, 7),  // 79 'O'
    (0x6b, 7),  // 80 'P'
    (0x6c, 7),  // 81 'Q'
    (0x6d, 7),  // 82 'R'
    (0x6e, 7),  // 83 'S'
    (0x6f, 7),  // 84 'T'
    (0x70, 7),  // 85 'U'
    (0x71, 7),  // 86 'V'
    (0x72, 7),  // 87 'W'
    (0xfc, 8),  // 88 'X'
    (0x73, 7),  // 89 'Y'
    (0xfd, 8),  // 90 'Z'
    (0x1ffb, 13),  // 91 '['
    (0x7fff0, 19),  // 92 '\\'
    (0x1ffc, 13),  // 93 ']'
    (0x3ffc, 14),  // 94 '^'
    (0x22, 6),  // 95 '_'
    (0x7ffd, 15),  // 96 '`'
    (0x3, 5),  // 97 'a'
    (0x23, 6),  // 98 'b'
    (0x4, 5),  // 99 'c'
    (0x24, 6),  // 100 'd'
    (0x5, 5),  // 101 'e'
    (0x25, 6),  // 102 'f'
    (0x26, 6),  // 103 'g'
    (0x27, 6),  // 104 'h'
    (0x6, 5),  // 105 'i'
    (0x74, 7),  // 106 'j'
    (0x75, 7),  // 107 'k'
    (0x28, 6),  // 108 'l'
    (0x29, 6),  // 109 'm'
    (0x2a, 6),  // 110 'n'
    (0x7, 5),  // 111 'o'
    (0x2b, 6),  // 112 'p'
    (0x76, 7),  // 113 'q'
    (0x2c, 6),  // 114 'r'
    (0x8, 5),  // 115 's'
    (0x9, 5),  // 116 't'
    (0x2d, 6),  // 117 'u'
    (0x77, 7),  // 118 'v'
    (0x78, 7),  // 119 'w'
    (0x79, 7),  // 120 'x'
    (0x7a, 7),  // 121 'y'
    (0x7b, 7),  // 122 'z'
    (0x7ffe, 15),  // 123 '{'
    (0x7fc, 11),  // 124 '|'
    (0x3ffd, 14),  // 125 '}'
    (0x1ffd, 13),  // 126 '~'
    (0xffffffc, 28),  // 127
    (0xfffe6, 20),  // 128
    (0x3fffd2, 22),  // 129
    (0xfffe7, 20),  // 130
    (0xfffe8, 20),  // 131
    (0x3fffd3, 22),  // 132
    (0x3fffd4, 22),  // 133
    (0x3fffd5, 22),  // 134
    (0x7fffd9, 23),  // 135
    (0x3fffd6, 22),  // 136
    (0x7fffda, 23),  // 137
    (0x7fffdb, 23),  // 138
    (0x7fffdc, 23),  // 139
    (0x7fffdd, 23),  // 140
    (0x7fffde, 23),  // 141
    (0xffffeb, 24),  // 142
    (0x7fffdf, 23),  // 143
    (0xffffec, 24),  // 144
    (0xffffed, 24),  // 145
    (0x3fffd7, 22),  // 146
    (0x7fffe0, 23),  // 147
    (0xffffee, 24),  // 148
    (0x7fffe1, 23),  // 149
    (0x7fffe2, 23),  // 150
    (0x7fffe3, 23),  // 151
    (0x7fffe4, 23),  // 152
    (0x1fffdc, 21),  // 153
    (0x3fffd8, 22),  // 154
    (0x7fffe5, 23),  // 155
    (0x3fffd9, 22),  // 156
    (0x7fffe6, 23),  // 157
    (0x7fffe7, 23),  // 158
    (0xffffef, 24),  // 159
    (0x3fffda, 22),  // 160
    (0x1fffdd, 21),  // 161
    (0xfffe9, 20),  // 162
    (0x3fffdb, 22),  // 163
    (0x3fffdc, 22),  // 164
    (0x7fffe8, 23),  // 165
    (0x7fffe9, 23),  // 166
    (0x1fffde, 21),  // 167
    (0x7fffea, 23),  // 168
    (0x3fffdd, 22),  // 169
    (0x3fffde, 22),  // 170
    (0xfffff0, 24),  // 171
    (0x1fffdf, 21),  // 172
    (0x3fffdf, 22),  // 173
    (0x7fffeb, 23),  // 174
    (0x7fffec, 23),  // 175
    (0x1fffe0, 21),  // 176
    (0x1fffe1, 21),  // 177
    (0x3fffe0, 22),  // 178
    (0x1fffe2, 21),  // 179
    (0x7fffed, 23),  // 180
    (0x3fffe1, 22),  // 181
    (0x7fffee, 23),  // 182
    (0x7fffef, 23),  // 183
    (0xfffea, 20),  // 184
    (0x3fffe2, 22),  // 185
    (0x3fffe3, 22),  // 186
    (0x3fffe4, 22),  // 187
    (0x7ffff0, 23),  // 188
    (0x3fffe5, 22),  // 189
    (0x3fffe6, 22),  // 190
    (0x7ffff1, 23),  // 191
    (0x3ffffe0, 26),  // 192
    (0x3ffffe1, 26),  // 193
    (0xfffeb, 20),  // 194
    (0x7fff1, 19),  // 195
    (0x3fffe7, 22),  // 196
    (0x7ffff2, 23),  // 197
    (0x3fffe8, 22),  // 198
    (0x1ffffec, 25),  // 199
    (0x3ffffe2, 26),  // 200
    (0x3ffffe3, 26),  // 201
    (0x3ffffe4, 26),  // 202
    (0x7ffffde, 27),  // 203
    (0x7ffffdf, 27),  // 204
    (0x3ffffe5, 26),  // 205
    (0xfffff1, 24),  // 206
    (0x1ffffed, 25),  // 207
    (0x7fff2, 19),  // 208
    (0x1fffe3, 21),  // 209
    (0x3ffffe6, 26),  // 210
    (0x7ffffe0, 27),  // 211
    (0x7ffffe1, 27),  // 212
    (0x3ffffe7, 26),  // 213
    (0x7ffffe2, 27),  // 214
    (0xfffff2, 24),  // 215
    (0x1fffe4, 21),  // 216
    (0x1fffe5, 21),  // 217
    (0x3ffffe8, 26),  // 218
    (0x3ffffe9, 26),  // 219
    (0xffffffd, 28),  // 220
    (0x7ffffe3, 27),  // 221
    (0x7ffffe4, 27),  // 222
    (0x7ffffe5, 27),  // 223
    (0xfffec, 20),  // 224
    (0xfffff3, 24),  // 225
    (0xfffed, 20),  // 226
    (0x1fffe6, 21),  // 227
    (0x3fffe9, 22),  // 228
    (0x1fffe7, 21),  // 229
    (0x1fffe8, 21),  // 230
    (0x7ffff3, 23),  // 231
    (0x3fffea, 22),  // 232
    (0x3fffeb, 22),  // 233
    (0x1ffffee, 25),  // 234
    (0x1ffffef, 25),  // 235
    (0xfffff4, 24),  // 236
    (0xfffff5, 24),  // 237
    (0x3ffffea, 26),  // 238
    (0x7ffff4, 23),  // 239
    (0x3ffffeb, 26),  // 240
    (0x7ffffe6, 27),  // 241
    (0x3ffffec, 26),  // 242
    (0x3ffffed, 26),  // 243
    (0x7ffffe7, 27),  // 244
    (0x7ffffe8, 27),  // 245
    (0x7ffffe9, 27),  // 246
    (0x7ffffea, 27),  // 247
    (0x7ffffeb, 27),  // 248
    (0xffffffe, 28),  // 249
    (0x7ffffec, 27),  // 250
    (0x7ffffed, 27),  // 251
    (0x7ffffee, 27),  // 252
    (0x7ffffef, 27),  // 253
    (0x7fffff0, 27),  // 254
    (0x3ffffee, 26),  // 255
    (0x3fffffff, 30),  // EOS
];

/// Nibble-driven decode automaton: `(next state, flags, decoded byte)`.
pub(crate) const DECODE_TABLE: [[(u8, u8, u8); 16]; 256] = [
    [
        (1, 0x00, 0x00), (2, 0x00, 0x00), (3, 0x00, 0x00), (4, 0x00, 0x00),
        (5, 0x00, 0x00), (6, 0x00, 0x00), (7, 0x00, 0x00), (8, 0x00, 0x00),
        (9, 0x00, 0x00), (10, 0x00, 0x00), (11, 0x00, 0x00), (12, 0x00, 0x00),
        (13, 0x00, 0x00), (14, 0x00, 0x00), (15, 0x00, 0x00), (16, 0x01, 0x00),
    ],
    [
        (17, 0x02, 0x30), (18, 0x02, 0x30), (19, 0x02, 0x30), (20, 0x02, 0x30),
        (21, 0x02, 0x30), (22, 0x02, 0x30), (23, 0x02, 0x30), (24, 0x03, 0x30),
        (17, 0x02, 0x31), (18, 0x02, 0x31), (19, 0x02, 0x31), (20, 0x02, 0x31),
        (21, 0x02, 0x31), (22, 0x02, 0x31), (23, 0x02, 0x31), (24, 0x03, 0x31),
    ],
    [
        (17, 0x02, 0x32), (18, 0x02, 0x32), (19, 0x02, 0x32), (20, 0x02, 0x32),
        (21, 0x02, 0x32), (22, 0x02, 0x32), (23, 0x02, 0x32), (24, 0x03, 0x32),
        (17, 0x02, 0x61), (18, 0x02, 0x61), (19, 0x02, 0x61), (20, 0x02, 0x61),
        (21, 0x02, 0x61), (22, 0x02, 0x61), (23, 0x02, 0x61), (24, 0x03, 0x61),
    ],
    [
        (17, 0x02, 0x63), (18, 0x02, 0x63), (19, 0x02, 0x63), (20, 0x02, 0x63),
        (21, 0x02, 0x63), (22, 0x02, 0x63), (23, 0x02, 0x63), (24, 0x03, 0x63),
        (17, 0x02, 0x65), (18, 0x02, 0x65), (19, 0x02, 0x65), (20, 0x02, 0x65),
        (21, 0x02, 0x65), (22, 0x02, 0x65), (23, 0x02, 0x65), (24, 0x03, 0x65),
    ],
    [
        (17, 0x02, 0x69), (18, 0x02, 0x69), (19, 0x02, 0x69), (20, 0x02, 0x69),
        (21, 0x02, 0x69), (22, 0x02, 0x69), (23, 0x02, 0x69), (24, 0x03, 0x69),
        (17, 0x02, 0x6f), (18, 0x02, 0x6f), (19, 0x02, 0x6f), (20, 0x02, 0x6f),
        (21, 0x02, 0x6f), (22, 0x02, 0x6f), (23, 0x02, 0x6f), (24, 0x03, 0x6f),
    ],
    [
        (17, 0x02, 0x73), (18, 0x02, 0x73), (19, 0x02, 0x73), (20, 0x02, 0x73),
        (21, 0x02, 0x73), (22, 0x02, 0x73), (23, 0x02, 0x73), (24, 0x03, 0x73),
        (17, 0x02, 0x74), (18, 0x02, 0x74), (19, 0x02, 0x74), (20, 0x02, 0x74),
        (21, 0x02, 0x74), (22, 0x02, 0x74), (23, 0x02, 0x74), (24, 0x03, 0x74),
    ],
    [
        (25, 0x02, 0x20), (26, 0x02, 0x20), (27, 0x02, 0x20), (28, 0x03, 0x20),
        (25, 0x02, 0x25), (26, 0x02, 0x25), (27, 0x02, 0x25), (28, 0x03, 0x25),
        (25, 0x02, 0x2d), (26, 0x02, 0x2d), (27, 0x02, 0x2d), (28, 0x03, 0x2d),
        (25, 0x02, 0x2e), (26, 0x02, 0x2e), (27, 0x02, 0x2e), (28, 0x03, 0x2e),
    ],
    [
        (25, 0x02, 0x2f), (26, 0x02, 0x2f), (27, 0x02, 0x2f), (28, 0x03, 0x2f),
        (25, 0x02, 0x33), (26, 0x02, 0x33), (27, 0x02, 0x33), (28, 0x03, 0x33),
        (25, 0x02, 0x34), (26, 0x02, 0x34), (27, 0x02, 0x34), (28, 0x03, 0x34),
        (25, 0x02, 0x35), (26, 0x02, 0x35), (27, 0x02, 0x35), (28, 0x03, 0x35),
    ],
    [
        (25, 0x02, 0x36), (26, 0x02, 0x36), (27, 0x02, 0x36), (28, 0x03, 0x36),
        (25, 0x02, 0x37), (26, 0x02, 0x37), (27, 0x02, 0x37), (28, 0x03, 0x37),
        (25, 0x02, 0x38), (26, 0x02, 0x38), (27, 0x02, 0x38), (28, 0x03, 0x38),
        (25, 0x02, 0x39), (26, 0x02, 0x39), (27, 0x02, 0x39), (28, 0x03, 0x39),
    ],
    [
        (25, 0x02, 0x3d), (26, 0x02, 0x3d), (27, 0x02, 0x3d), (28, 0x03, 0x3d),
        (25, 0x02, 0x41), (26, 0x02, 0x41), (27, 0x02, 0x41), (28, 0x03, 0x41),
        (25, 0x02, 0x5f), (26, 0x02, 0x5f), (27, 0x02, 0x5f), (28, 0x03, 0x5f),
        (25, 0x02, 0x62), (26, 0x02, 0x62), (27, 0x02, 0x62), (28, 0x03, 0x62),
    ],
    [
        (25, 0x02, 0x64), (26, 0x02, 0x64), (27, 0x02, 0x64), (28, 0x03, 0x64),
        (25, 0x02, 0x66), (26, 0x02, 0x66), (27, 0x02, 0x66), (28, 0x03, 0x66),
        (25, 0x02, 0x67), (26, 0x02, 0x67), (27, 0x02, 0x67), (28, 0x03, 0x67),
        (25, 0x02, 0x68), (26, 0x02, 0x68), (27, 0x02, 0x68), (28, 0x03, 0x68),
    ],
    [
        (25, 0x02, 0x6c), (26, 0x02, 0x6c), (27, 0x02, 0x6c), (28, 0x03, 0x6c),
        (25, 0x02, 0x6d), (26, 0x02, 0x6d), (27, 0x02, 0x6d), (28, 0x03, 0x6d),
        (25, 0x02, 0x6e), (26, 0x02, 0x6e), (27, 0x02, 0x6e), (28, 0x03, 0x6e),
        (25, 0x02, 0x70), (26, 0x02, 0x70), (27, 0x02, 0x70), (28, 0x03, 0x70),
    ],
    [
        (25, 0x02, 0x72), (26, 0x02, 0x72), (27, 0x02, 0x72), (28, 0x03, 0x72),
        (25, 0x02, 0x75), (26, 0x02, 0x75), (27, 0x02, 0x75), (28, 0x03, 0x75),
        (29, 0x02, 0x3a), (30, 0x03, 0x3a), (29, 0x02, 0x42), (30, 0x03, 0x42),
        (29, 0x02, 0x43), (30, 0x03, 0x43), (29, 0x02, 0x44), (30, 0x03, 0x44),
    ],
    [
        (29, 0x02, 0x45), (30, 0x03, 0x45), (29, 0x02, 0x46), (30, 0x03, 0x46),
        (29, 0x02, 0x47), (30, 0x03, 0x47), (29, 0x02, 0x48), (30, 0x03, 0x48),
        (29, 0x02, 0x49), (30, 0x03, 0x49), (29, 0x02, 0x4a), (30, 0x03, 0x4a),
        (29, 0x02, 0x4b), (30, 0x03, 0x4b), (29, 0x02, 0x4c), (30, 0x03, 0x4c),
    ],
    [
        (29, 0x02, 0x4d), (30, 0x03, 0x4d), (29, 0x02, 0x4e), (30, 0x03, 0x4e),
        (29, 0x02, 0x4f), (30, 0x03, 0x4f), (29, 0x02, 0x50), (30, 0x03, 0x50),
        (29, 0x02, 0x51), (30, 0x03, 0x51), (29, 0x02, 0x52), (30, 0x03, 0x52),
        (29, 0x02, 0x53), (30, 0x03, 0x53), (29, 0x02, 0x54), (30, 0x03, 0x54),
    ],
    [
        (29, 0x02, 0x55), (30, 0x03, 0x55), (29, 0x02, 0x56), (30, 0x03, 0x56),
        (29, 0x02, 0x57), (30, 0x03, 0x57), (29, 0x02, 0x59), (30, 0x03, 0x59),
        (29, 0x02, 0x6a), (30, 0x03, 0x6a), (29, 0x02, 0x6b), (30, 0x03, 0x6b),
        (29, 0x02, 0x71), (30, 0x03, 0x71), (29, 0x02, 0x76), (30, 0x03, 0x76),
    ],
    [
        (29, 0x02, 0x77), (30, 0x03, 0x77), (29, 0x02, 0x78), (30, 0x03, 0x78),
        (29, 0x02, 0x79), (30, 0x03, 0x79), (29, 0x02, 0x7a), (30, 0x03, 0x7a),
        (0, 0x03, 0x26), (0, 0x03, 0x2a), (0, 0x03, 0x2c), (0, 0x03, 0x3b),
        (0, 0x03, 0x58), (0, 0x03, 0x5a), (31, 0x00, 0x00), (32, 0x00, 0x00),
    ],
    [
        (25, 0x02, 0x30), (26, 0x02, 0x30), (27, 0x02, 0x30), (28, 0x03, 0x30),
        (25, 0x02, 0x31), (26, 0x02, 0x31), (27, 0x02, 0x31), (28, 0x03, 0x31),
        (25, 0x02, 0x32), (26, 0x02, 0x32), (27, 0x02, 0x32), (28, 0x03, 0x32),
        (25, 0x02, 0x61), (26, 0x02, 0x61), (27, 0x02, 0x61), (28, 0x03, 0x61),
    ],
    [
        (25, 0x02, 0x63), (26, 0x02, 0x63), (27, 0x02, 0x63), (28, 0x03, 0x63),
        (25, 0x02, 0x65), (26, 0x02, 0x65), (27, 0x02, 0x65), (28, 0x03, 0x65),
        (25, 0x02, 0x69), (26, 0x02, 0x69), (27, 0x02, 0x69), (28, 0x03, 0x69),
        (25, 0x02, 0x6f), (26, 0x02, 0x6f), (27, 0x02, 0x6f), (28, 0x03, 0x6f),
    ],
    [
        (25, 0x02, 0x73), (26, 0x02, 0x73), (27, 0x02, 0x73), (28, 0x03, 0x73),
        (25, 0x02, 0x74), (26, 0x02, 0x74), (27, 0x02, 0x74), (28, 0x03, 0x74),
        (29, 0x02, 0x20), (30, 0x03, 0x20), (29, 0x02, 0x25), (30, 0x03, 0x25),
        (29, 0x02, 0x2d), (30, 0x03, 0x2d), (29, 0x02, 0x2e), (30, 0x03, 0x2e),
    ],
    [
        (29, 0x02, 0x2f), (30, 0x03, 0x2f), (29, 0x02, 0x33), (30, 0x03, 0x33),
        (29, 0x02, 0x34), (30, 0x03, 0x34), (29, 0x02, 0x35), (30, 0x03, 0x35),
        (29, 0x02, 0x36), (30, 0x03, 0x36), (29, 0x02, 0x37), (30, 0x03, 0x37),
        (29, 0x02, 0x38), (30, 0x03, 0x38), (29, 0x02, 0x39), (30, 0x03, 0x39),
    ],
    [
        (29, 0x02, 0x3d), (30, 0x03, 0x3d), (29, 0x02, 0x41), (30, 0x03, 0x41),
        (29, 0x02, 0x5f), (30, 0x03, 0x5f), (29, 0x02, 0x62), (30, 0x03, 0x62),
        (29, 0x02, 0x64), (30, 0x03, 0x64), (29, 0x02, 0x66), (30, 0x03, 0x66),
        (29, 0x02, 0x67), (30, 0x03, 0x67), (29, 0x02, 0x68), (30, 0x03, 0x68),
    ],
    [
        (29, 0x02, 0x6c), (30, 0x03, 0x6c), (29, 0x02, 0x6d), (30, 0x03, 0x6d),
        (29, 0x02, 0x6e), (30, 0x03, 0x6e), (29, 0x02, 0x70), (30, 0x03, 0x70),
        (29, 0x02, 0x72), (30, 0x03, 0x72), (29, 0x02, 0x75), (30, 0x03, 0x75),
        (0, 0x03, 0x3a), (0, 0x03, 0x42), (0, 0x03, 0x43), (0, 0x03, 0x44),
    ],
    [
        (0, 0x03, 0x45), (0, 0x03, 0x46), (0, 0x03, 0x47), (0, 0x03, 0x48),
        (0, 0x03, 0x49), (0, 0x03, 0x4a), (0, 0x03, 0x4b), (0, 0x03, 0x4c),
        (0, 0x03, 0x4d), (0, 0x03, 0x4e), (0, 0x03, 0x4f), (0, 0x03, 0x50),
        (0, 0x03, 0x51), (0, 0x03, 0x52), (0, 0x03, 0x53), (0, 0x03, 0x54),
    ],
    [
        (0, 0x03, 0x55), (0, 0x03, 0x56), (0, 0x03, 0x57), (0, 0x03, 0x59),
        (0, 0x03, 0x6a), (0, 0x03, 0x6b), (0, 0x03, 0x71), (0, 0x03, 0x76),
        (0, 0x03, 0x77), (0, 0x03, 0x78), (0, 0x03, 0x79), (0, 0x03, 0x7a),
        (33, 0x00, 0x00), (34, 0x00, 0x00), (35, 0x00, 0x00), (36, 0x01, 0x00),
    ],
    [
        (29, 0x02, 0x30), (30, 0x03, 0x30), (29, 0x02, 0x31), (30, 0x03, 0x31),
        (29, 0x02, 0x32), (30, 0x03, 0x32), (29, 0x02, 0x61), (30, 0x03, 0x61),
        (29, 0x02, 0x63), (30, 0x03, 0x63), (29, 0x02, 0x65), (30, 0x03, 0x65),
        (29, 0x02, 0x69), (30, 0x03, 0x69), (29, 0x02, 0x6f), (30, 0x03, 0x6f),
    ],
    [
        (29, 0x02, 0x73), (30, 0x03, 0x73), (29, 0x02, 0x74), (30, 0x03, 0x74),
        (0, 0x03, 0x20), (0, 0x03, 0x25), (0, 0x03, 0x2d), (0, 0x03, 0x2e),
        (0, 0x03, 0x2f), (0, 0x03, 0x33), (0, 0x03, 0x34), (0, 0x03, 0x35),
        (0, 0x03, 0x36), (0, 0x03, 0x37), (0, 0x03, 0x38), (0, 0x03, 0x39),
    ],
    [
        (0, 0x03, 0x3d), (0, 0x03, 0x41), (0, 0x03, 0x5f), (0, 0x03, 0x62),
        (0, 0x03, 0x64), (0, 0x03, 0x66), (0, 0x03, 0x67), (0, 0x03, 0x68),
        (0, 0x03, 0x6c), (0, 0x03, 0x6d), (0, 0x03, 0x6e), (0, 0x03, 0x70),
        (0, 0x03, 0x72), (0, 0x03, 0x75), (37, 0x00, 0x00), (38, 0x00, 0x00),
    ],
    [
        (39, 0x00, 0x00), (40, 0x00, 0x00), (41, 0x00, 0x00), (42, 0x00, 0x00),
        (43, 0x00, 0x00), (44, 0x00, 0x00), (45, 0x00, 0x00), (46, 0x00, 0x00),
        (47, 0x00, 0x00), (48, 0x00, 0x00), (49, 0x00, 0x00), (50, 0x00, 0x00),
        (51, 0x00, 0x00), (52, 0x00, 0x00), (53, 0x00, 0x00), (54, 0x01, 0x00),
    ],
    [
        (0, 0x03, 0x30), (0, 0x03, 0x31), (0, 0x03, 0x32), (0, 0x03, 0x61),
        (0, 0x03, 0x63), (0, 0x03, 0x65), (0, 0x03, 0x69), (0, 0x03, 0x6f),
        (0, 0x03, 0x73), (0, 0x03, 0x74), (55, 0x00, 0x00), (56, 0x00, 0x00),
        (57, 0x00, 0x00), (58, 0x00, 0x00), (59, 0x00, 0x00), (60, 0x00, 0x00),
    ],
    [
        (61, 0x00, 0x00), (62, 0x00, 0x00), (63, 0x00, 0x00), (64, 0x00, 0x00),
        (65, 0x00, 0x00), (66, 0x00, 0x00), (67, 0x00, 0x00), (68, 0x00, 0x00),
        (69, 0x00, 0x00), (70, 0x00, 0x00), (71, 0x00, 0x00), (72, 0x00, 0x00),
        (73, 0x00, 0x00), (74, 0x00, 0x00), (75, 0x00, 0x00), (76, 0x01, 0x00),
    ],
    [
        (25, 0x02, 0x21), (26, 0x02, 0x21), (27, 0x02, 0x21), (28, 0x03, 0x21),
        (25, 0x02, 0x22), (26, 0x02, 0x22), (27, 0x02, 0x22), (28, 0x03, 0x22),
        (25, 0x02, 0x28), (26, 0x02, 0x28), (27, 0x02, 0x28), (28, 0x03, 0x28),
        (25, 0x02, 0x29), (26, 0x02, 0x29), (27, 0x02, 0x29), (28, 0x03, 0x29),
    ],
    [
        (25, 0x02, 0x3f), (26, 0x02, 0x3f), (27, 0x02, 0x3f), (28, 0x03, 0x3f),
        (29, 0x02, 0x27), (30, 0x03, 0x27), (29, 0x02, 0x2b), (30, 0x03, 0x2b),
        (29, 0x02, 0x7c), (30, 0x03, 0x7c), (0, 0x03, 0x23), (0, 0x03, 0x3e),
        (77, 0x00, 0x00), (78, 0x00, 0x00), (79, 0x00, 0x00), (80, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x26), (18, 0x02, 0x26), (19, 0x02, 0x26), (20, 0x02, 0x26),
        (21, 0x02, 0x26), (22, 0x02, 0x26), (23, 0x02, 0x26), (24, 0x03, 0x26),
        (17, 0x02, 0x2a), (18, 0x02, 0x2a), (19, 0x02, 0x2a), (20, 0x02, 0x2a),
        (21, 0x02, 0x2a), (22, 0x02, 0x2a), (23, 0x02, 0x2a), (24, 0x03, 0x2a),
    ],
    [
        (17, 0x02, 0x2c), (18, 0x02, 0x2c), (19, 0x02, 0x2c), (20, 0x02, 0x2c),
        (21, 0x02, 0x2c), (22, 0x02, 0x2c), (23, 0x02, 0x2c), (24, 0x03, 0x2c),
        (17, 0x02, 0x3b), (18, 0x02, 0x3b), (19, 0x02, 0x3b), (20, 0x02, 0x3b),
        (21, 0x02, 0x3b), (22, 0x02, 0x3b), (23, 0x02, 0x3b), (24, 0x03, 0x3b),
    ],
    [
        (17, 0x02, 0x58), (18, 0x02, 0x58), (19, 0x02, 0x58), (20, 0x02, 0x58),
        (21, 0x02, 0x58), (22, 0x02, 0x58), (23, 0x02, 0x58), (24, 0x03, 0x58),
        (17, 0x02, 0x5a), (18, 0x02, 0x5a), (19, 0x02, 0x5a), (20, 0x02, 0x5a),
        (21, 0x02, 0x5a), (22, 0x02, 0x5a), (23, 0x02, 0x5a), (24, 0x03, 0x5a),
    ],
    [
        (29, 0x02, 0x21), (30, 0x03, 0x21), (29, 0x02, 0x22), (30, 0x03, 0x22),
        (29, 0x02, 0x28), (30, 0x03, 0x28), (29, 0x02, 0x29), (30, 0x03, 0x29),
        (29, 0x02, 0x3f), (30, 0x03, 0x3f), (0, 0x03, 0x27), (0, 0x03, 0x2b),
        (0, 0x03, 0x7c), (81, 0x00, 0x00), (82, 0x00, 0x00), (83, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x3a), (18, 0x02, 0x3a), (19, 0x02, 0x3a), (20, 0x02, 0x3a),
        (21, 0x02, 0x3a), (22, 0x02, 0x3a), (23, 0x02, 0x3a), (24, 0x03, 0x3a),
        (17, 0x02, 0x42), (18, 0x02, 0x42), (19, 0x02, 0x42), (20, 0x02, 0x42),
        (21, 0x02, 0x42), (22, 0x02, 0x42), (23, 0x02, 0x42), (24, 0x03, 0x42),
    ],
    [
        (17, 0x02, 0x43), (18, 0x02, 0x43), (19, 0x02, 0x43), (20, 0x02, 0x43),
        (21, 0x02, 0x43), (22, 0x02, 0x43), (23, 0x02, 0x43), (24, 0x03, 0x43),
        (17, 0x02, 0x44), (18, 0x02, 0x44), (19, 0x02, 0x44), (20, 0x02, 0x44),
        (21, 0x02, 0x44), (22, 0x02, 0x44), (23, 0x02, 0x44), (24, 0x03, 0x44),
    ],
    [
        (17, 0x02, 0x45), (18, 0x02, 0x45), (19, 0x02, 0x45), (20, 0x02, 0x45),
        (21, 0x02, 0x45), (22, 0x02, 0x45), (23, 0x02, 0x45), (24, 0x03, 0x45),
        (17, 0x02, 0x46), (18, 0x02, 0x46), (19, 0x02, 0x46), (20, 0x02, 0x46),
        (21, 0x02, 0x46), (22, 0x02, 0x46), (23, 0x02, 0x46), (24, 0x03, 0x46),
    ],
    [
        (17, 0x02, 0x47), (18, 0x02, 0x47), (19, 0x02, 0x47), (20, 0x02, 0x47),
        (21, 0x02, 0x47), (22, 0x02, 0x47), (23, 0x02, 0x47), (24, 0x03, 0x47),
        (17, 0x02, 0x48), (18, 0x02, 0x48), (19, 0x02, 0x48), (20, 0x02, 0x48),
        (21, 0x02, 0x48), (22, 0x02, 0x48), (23, 0x02, 0x48), (24, 0x03, 0x48),
    ],
    [
        (17, 0x02, 0x49), (18, 0x02, 0x49), (19, 0x02, 0x49), (20, 0x02, 0x49),
        (21, 0x02, 0x49), (22, 0x02, 0x49), (23, 0x02, 0x49), (24, 0x03, 0x49),
        (17, 0x02, 0x4a), (18, 0x02, 0x4a), (19, 0x02, 0x4a), (20, 0x02, 0x4a),
        (21, 0x02, 0x4a), (22, 0x02, 0x4a), (23, 0x02, 0x4a), (24, 0x03, 0x4a),
    ],
    [
        (17, 0x02, 0x4b), (18, 0x02, 0x4b), (19, 0x02, 0x4b), (20, 0x02, 0x4b),
        (21, 0x02, 0x4b), (22, 0x02, 0x4b), (23, 0x02, 0x4b), (24, 0x03, 0x4b),
        (17, 0x02, 0x4c), (18, 0x02, 0x4c), (19, 0x02, 0x4c), (20, 0x02, 0x4c),
        (21, 0x02, 0x4c), (22, 0x02, 0x4c), (23, 0x02, 0x4c), (24, 0x03, 0x4c),
    ],
    [
        (17, 0x02, 0x4d), (18, 0x02, 0x4d), (19, 0x02, 0x4d), (20, 0x02, 0x4d),
        (21, 0x02, 0x4d), (22, 0x02, 0x4d), (23, 0x02, 0x4d), (24, 0x03, 0x4d),
        (17, 0x02, 0x4e), (18, 0x02, 0x4e), (19, 0x02, 0x4e), (20, 0x02, 0x4e),
        (21, 0x02, 0x4e), (22, 0x02, 0x4e), (23, 0x02, 0x4e), (24, 0x03, 0x4e),
    ],
    [
        (17, 0x02, 0x4f), (18, 0x02, 0x4f), (19, 0x02, 0x4f), (20, 0x02, 0x4f),
        (21, 0x02, 0x4f), (22, 0x02, 0x4f), (23, 0x02, 0x4f), (24, 0x03, 0x4f),
        (17, 0x02, 0x50), (18, 0x02, 0x50), (19, 0x02, 0x50), (20, 0x02, 0x50),
        (21, 0x02, 0x50), (22, 0x02, 0x50), (23, 0x02, 0x50), (24, 0x03, 0x50),
    ],
    [
        (17, 0x02, 0x51), (18, 0x02, 0x51), (19, 0x02, 0x51), (20, 0x02, 0x51),
        (21, 0x02, 0x51), (22, 0x02, 0x51), (23, 0x02, 0x51), (24, 0x03, 0x51),
        (17, 0x02, 0x52), (18, 0x02, 0x52), (19, 0x02, 0x52), (20, 0x02, 0x52),
        (21, 0x02, 0x52), (22, 0x02, 0x52), (23, 0x02, 0x52), (24, 0x03, 0x52),
    ],
    [
        (17, 0x02, 0x53), (18, 0x02, 0x53), (19, 0x02, 0x53), (20, 0x02, 0x53),
        (21, 0x02, 0x53), (22, 0x02, 0x53), (23, 0x02, 0x53), (24, 0x03, 0x53),
        (17, 0x02, 0x54), (18, 0x02, 0x54), (19, 0x02, 0x54), (20, 0x02, 0x54),
        (21, 0x02, 0x54), (22, 0x02, 0x54), (23, 0x02, 0x54), (24, 0x03, 0x54),
    ],
    [
        (17, 0x02, 0x55), (18, 0x02, 0x55), (19, 0x02, 0x55), (20, 0x02, 0x55),
        (21, 0x02, 0x55), (22, 0x02, 0x55), (23, 0x02, 0x55), (24, 0x03, 0x55),
        (17, 0x02, 0x56), (18, 0x02, 0x56), (19, 0x02, 0x56), (20, 0x02, 0x56),
        (21, 0x02, 0x56), (22, 0x02, 0x56), (23, 0x02, 0x56), (24, 0x03, 0x56),
    ],
    [
        (17, 0x02, 0x57), (18, 0x02, 0x57), (19, 0x02, 0x57), (20, 0x02, 0x57),
        (21, 0x02, 0x57), (22, 0x02, 0x57), (23, 0x02, 0x57), (24, 0x03, 0x57),
        (17, 0x02, 0x59), (18, 0x02, 0x59), (19, 0x02, 0x59), (20, 0x02, 0x59),
        (21, 0x02, 0x59), (22, 0x02, 0x59), (23, 0x02, 0x59), (24, 0x03, 0x59),
    ],
    [
        (17, 0x02, 0x6a), (18, 0x02, 0x6a), (19, 0x02, 0x6a), (20, 0x02, 0x6a),
        (21, 0x02, 0x6a), (22, 0x02, 0x6a), (23, 0x02, 0x6a), (24, 0x03, 0x6a),
        (17, 0x02, 0x6b), (18, 0x02, 0x6b), (19, 0x02, 0x6b), (20, 0x02, 0x6b),
        (21, 0x02, 0x6b), (22, 0x02, 0x6b), (23, 0x02, 0x6b), (24, 0x03, 0x6b),
    ],
    [
        (17, 0x02, 0x71), (18, 0x02, 0x71), (19, 0x02, 0x71), (20, 0x02, 0x71),
        (21, 0x02, 0x71), (22, 0x02, 0x71), (23, 0x02, 0x71), (24, 0x03, 0x71),
        (17, 0x02, 0x76), (18, 0x02, 0x76), (19, 0x02, 0x76), (20, 0x02, 0x76),
        (21, 0x02, 0x76), (22, 0x02, 0x76), (23, 0x02, 0x76), (24, 0x03, 0x76),
    ],
    [
        (17, 0x02, 0x77), (18, 0x02, 0x77), (19, 0x02, 0x77), (20, 0x02, 0x77),
        (21, 0x02, 0x77), (22, 0x02, 0x77), (23, 0x02, 0x77), (24, 0x03, 0x77),
        (17, 0x02, 0x78), (18, 0x02, 0x78), (19, 0x02, 0x78), (20, 0x02, 0x78),
        (21, 0x02, 0x78), (22, 0x02, 0x78), (23, 0x02, 0x78), (24, 0x03, 0x78),
    ],
    [
        (17, 0x02, 0x79), (18, 0x02, 0x79), (19, 0x02, 0x79), (20, 0x02, 0x79),
        (21, 0x02, 0x79), (22, 0x02, 0x79), (23, 0x02, 0x79), (24, 0x03, 0x79),
        (17, 0x02, 0x7a), (18, 0x02, 0x7a), (19, 0x02, 0x7a), (20, 0x02, 0x7a),
        (21, 0x02, 0x7a), (22, 0x02, 0x7a), (23, 0x02, 0x7a), (24, 0x03, 0x7a),
    ],
    [
        (25, 0x02, 0x26), (26, 0x02, 0x26), (27, 0x02, 0x26), (28, 0x03, 0x26),
        (25, 0x02, 0x2a), (26, 0x02, 0x2a), (27, 0x02, 0x2a), (28, 0x03, 0x2a),
        (25, 0x02, 0x2c), (26, 0x02, 0x2c), (27, 0x02, 0x2c), (28, 0x03, 0x2c),
        (25, 0x02, 0x3b), (26, 0x02, 0x3b), (27, 0x02, 0x3b), (28, 0x03, 0x3b),
    ],
    [
        (25, 0x02, 0x58), (26, 0x02, 0x58), (27, 0x02, 0x58), (28, 0x03, 0x58),
        (25, 0x02, 0x5a), (26, 0x02, 0x5a), (27, 0x02, 0x5a), (28, 0x03, 0x5a),
        (0, 0x03, 0x21), (0, 0x03, 0x22), (0, 0x03, 0x28), (0, 0x03, 0x29),
        (0, 0x03, 0x3f), (84, 0x00, 0x00), (85, 0x00, 0x00), (86, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x20), (18, 0x02, 0x20), (19, 0x02, 0x20), (20, 0x02, 0x20),
        (21, 0x02, 0x20), (22, 0x02, 0x20), (23, 0x02, 0x20), (24, 0x03, 0x20),
        (17, 0x02, 0x25), (18, 0x02, 0x25), (19, 0x02, 0x25), (20, 0x02, 0x25),
        (21, 0x02, 0x25), (22, 0x02, 0x25), (23, 0x02, 0x25), (24, 0x03, 0x25),
    ],
    [
        (17, 0x02, 0x2d), (18, 0x02, 0x2d), (19, 0x02, 0x2d), (20, 0x02, 0x2d),
        (21, 0x02, 0x2d), (22, 0x02, 0x2d), (23, 0x02, 0x2d), (24, 0x03, 0x2d),
        (17, 0x02, 0x2e), (18, 0x02, 0x2e), (19, 0x02, 0x2e), (20, 0x02, 0x2e),
        (21, 0x02, 0x2e), (22, 0x02, 0x2e), (23, 0x02, 0x2e), (24, 0x03, 0x2e),
    ],
    [
        (17, 0x02, 0x2f), (18, 0x02, 0x2f), (19, 0x02, 0x2f), (20, 0x02, 0x2f),
        (21, 0x02, 0x2f), (22, 0x02, 0x2f), (23, 0x02, 0x2f), (24, 0x03, 0x2f),
        (17, 0x02, 0x33), (18, 0x02, 0x33), (19, 0x02, 0x33), (20, 0x02, 0x33),
        (21, 0x02, 0x33), (22, 0x02, 0x33), (23, 0x02, 0x33), (24, 0x03, 0x33),
    ],
    [
        (17, 0x02, 0x34), (18, 0x02, 0x34), (19, 0x02, 0x34), (20, 0x02, 0x34),
        (21, 0x02, 0x34), (22, 0x02, 0x34), (23, 0x02, 0x34), (24, 0x03, 0x34),
        (17, 0x02, 0x35), (18, 0x02, 0x35), (19, 0x02, 0x35), (20, 0x02, 0x35),
        (21, 0x02, 0x35), (22, 0x02, 0x35), (23, 0x02, 0x35), (24, 0x03, 0x35),
    ],
    [
        (17, 0x02, 0x36), (18, 0x02, 0x36), (19, 0x02, 0x36), (20, 0x02, 0x36),
        (21, 0x02, 0x36), (22, 0x02, 0x36), (23, 0x02, 0x36), (24, 0x03, 0x36),
        (17, 0x02, 0x37), (18, 0x02, 0x37), (19, 0x02, 0x37), (20, 0x02, 0x37),
        (21, 0x02, 0x37), (22, 0x02, 0x37), (23, 0x02, 0x37), (24, 0x03, 0x37),
    ],
    [
        (17, 0x02, 0x38), (18, 0x02, 0x38), (19, 0x02, 0x38), (20, 0x02, 0x38),
        (21, 0x02, 0x38), (22, 0x02, 0x38), (23, 0x02, 0x38), (24, 0x03, 0x38),
        (17, 0x02, 0x39), (18, 0x02, 0x39), (19, 0x02, 0x39), (20, 0x02, 0x39),
        (21, 0x02, 0x39), (22, 0x02, 0x39), (23, 0x02, 0x39), (24, 0x03, 0x39),
    ],
    [
        (17, 0x02, 0x3d), (18, 0x02, 0x3d), (19, 0x02, 0x3d), (20, 0x02, 0x3d),
        (21, 0x02, 0x3d), (22, 0x02, 0x3d), (23, 0x02, 0x3d), (24, 0x03, 0x3d),
        (17, 0x02, 0x41), (18, 0x02, 0x41), (19, 0x02, 0x41), (20, 0x02, 0x41),
        (21, 0x02, 0x41), (22, 0x02, 0x41), (23, 0x02, 0x41), (24, 0x03, 0x41),
    ],
    [
        (17, 0x02, 0x5f), (18, 0x02, 0x5f), (19, 0x02, 0x5f), (20, 0x02, 0x5f),
        (21, 0x02, 0x5f), (22, 0x02, 0x5f), (23, 0x02, 0x5f), (24, 0x03, 0x5f),
        (17, 0x02, 0x62), (18, 0x02, 0x62), (19, 0x02, 0x62), (20, 0x02, 0x62),
        (21, 0x02, 0x62), (22, 0x02, 0x62), (23, 0x02, 0x62), (24, 0x03, 0x62),
    ],
    [
        (17, 0x02, 0x64), (18, 0x02, 0x64), (19, 0x02, 0x64), (20, 0x02, 0x64),
        (21, 0x02, 0x64), (22, 0x02, 0x64), (23, 0x02, 0x64), (24, 0x03, 0x64),
        (17, 0x02, 0x66), (18, 0x02, 0x66), (19, 0x02, 0x66), (20, 0x02, 0x66),
        (21, 0x02, 0x66), (22, 0x02, 0x66), (23, 0x02, 0x66), (24, 0x03, 0x66),
    ],
    [
        (17, 0x02, 0x67), (18, 0x02, 0x67), (19, 0x02, 0x67), (20, 0x02, 0x67),
        (21, 0x02, 0x67), (22, 0x02, 0x67), (23, 0x02, 0x67), (24, 0x03, 0x67),
        (17, 0x02, 0x68), (18, 0x02, 0x68), (19, 0x02, 0x68), (20, 0x02, 0x68),
        (21, 0x02, 0x68), (22, 0x02, 0x68), (23, 0x02, 0x68), (24, 0x03, 0x68),
    ],
    [
        (17, 0x02, 0x6c), (18, 0x02, 0x6c), (19, 0x02, 0x6c), (20, 0x02, 0x6c),
        (21, 0x02, 0x6c), (22, 0x02, 0x6c), (23, 0x02, 0x6c), (24, 0x03, 0x6c),
        (17, 0x02, 0x6d), (18, 0x02, 0x6d), (19, 0x02, 0x6d), (20, 0x02, 0x6d),
        (21, 0x02, 0x6d), (22, 0x02, 0x6d), (23, 0x02, 0x6d), (24, 0x03, 0x6d),
    ],
    [
        (17, 0x02, 0x6e), (18, 0x02, 0x6e), (19, 0x02, 0x6e), (20, 0x02, 0x6e),
        (21, 0x02, 0x6e), (22, 0x02, 0x6e), (23, 0x02, 0x6e), (24, 0x03, 0x6e),
        (17, 0x02, 0x70), (18, 0x02, 0x70), (19, 0x02, 0x70), (20, 0x02, 0x70),
        (21, 0x02, 0x70), (22, 0x02, 0x70), (23, 0x02, 0x70), (24, 0x03, 0x70),
    ],
    [
        (17, 0x02, 0x72), (18, 0x02, 0x72), (19, 0x02, 0x72), (20, 0x02, 0x72),
        (21, 0x02, 0x72), (22, 0x02, 0x72), (23, 0x02, 0x72), (24, 0x03, 0x72),
        (17, 0x02, 0x75), (18, 0x02, 0x75), (19, 0x02, 0x75), (20, 0x02, 0x75),
        (21, 0x02, 0x75), (22, 0x02, 0x75), (23, 0x02, 0x75), (24, 0x03, 0x75),
    ],
    [
        (25, 0x02, 0x3a), (26, 0x02, 0x3a), (27, 0x02, 0x3a), (28, 0x03, 0x3a),
        (25, 0x02, 0x42), (26, 0x02, 0x42), (27, 0x02, 0x42), (28, 0x03, 0x42),
        (25, 0x02, 0x43), (26, 0x02, 0x43), (27, 0x02, 0x43), (28, 0x03, 0x43),
        (25, 0x02, 0x44), (26, 0x02, 0x44), (27, 0x02, 0x44), (28, 0x03, 0x44),
    ],
    [
        (25, 0x02, 0x45), (26, 0x02, 0x45), (27, 0x02, 0x45), (28, 0x03, 0x45),
        (25, 0x02, 0x46), (26, 0x02, 0x46), (27, 0x02, 0x46), (28, 0x03, 0x46),
        (25, 0x02, 0x47), (26, 0x02, 0x47), (27, 0x02, 0x47), (28, 0x03, 0x47),
        (25, 0x02, 0x48), (26, 0x02, 0x48), (27, 0x02, 0x48), (28, 0x03, 0x48),
    ],
    [
        (25, 0x02, 0x49), (26, 0x02, 0x49), (27, 0x02, 0x49), (28, 0x03, 0x49),
        (25, 0x02, 0x4a), (26, 0x02, 0x4a), (27, 0x02, 0x4a), (28, 0x03, 0x4a),
        (25, 0x02, 0x4b), (26, 0x02, 0x4b), (27, 0x02, 0x4b), (28, 0x03, 0x4b),
        (25, 0x02, 0x4c), (26, 0x02, 0x4c), (27, 0x02, 0x4c), (28, 0x03, 0x4c),
    ],
    [
        (25, 0x02, 0x4d), (26, 0x02, 0x4d), (27, 0x02, 0x4d), (28, 0x03, 0x4d),
        (25, 0x02, 0x4e), (26, 0x02, 0x4e), (27, 0x02, 0x4e), (28, 0x03, 0x4e),
        (25, 0x02, 0x4f), (26, 0x02, 0x4f), (27, 0x02, 0x4f), (28, 0x03, 0x4f),
        (25, 0x02, 0x50), (26, 0x02, 0x50), (27, 0x02, 0x50), (28, 0x03, 0x50),
    ],
    [
        (25, 0x02, 0x51), (26, 0x02, 0x51), (27, 0x02, 0x51), (28, 0x03, 0x51),
        (25, 0x02, 0x52), (26, 0x02, 0x52), (27, 0x02, 0x52), (28, 0x03, 0x52),
        (25, 0x02, 0x53), (26, 0x02, 0x53), (27, 0x02, 0x53), (28, 0x03, 0x53),
        (25, 0x02, 0x54), (26, 0x02, 0x54), (27, 0x02, 0x54), (28, 0x03, 0x54),
    ],
    [
        (25, 0x02, 0x55), (26, 0x02, 0x55), (27, 0x02, 0x55), (28, 0x03, 0x55),
        (25, 0x02, 0x56), (26, 0x02, 0x56), (27, 0x02, 0x56), (28, 0x03, 0x56),
        (25, 0x02, 0x57), (26, 0x02, 0x57), (27, 0x02, 0x57), (28, 0x03, 0x57),
        (25, 0x02, 0x59), (26, 0x02, 0x59), (27, 0x02, 0x59), (28, 0x03, 0x59),
    ],
    [
        (25, 0x02, 0x6a), (26, 0x02, 0x6a), (27, 0x02, 0x6a), (28, 0x03, 0x6a),
        (25, 0x02, 0x6b), (26, 0x02, 0x6b), (27, 0x02, 0x6b), (28, 0x03, 0x6b),
        (25, 0x02, 0x71), (26, 0x02, 0x71), (27, 0x02, 0x71), (28, 0x03, 0x71),
        (25, 0x02, 0x76), (26, 0x02, 0x76), (27, 0x02, 0x76), (28, 0x03, 0x76),
    ],
    [
        (25, 0x02, 0x77), (26, 0x02, 0x77), (27, 0x02, 0x77), (28, 0x03, 0x77),
        (25, 0x02, 0x78), (26, 0x02, 0x78), (27, 0x02, 0x78), (28, 0x03, 0x78),
        (25, 0x02, 0x79), (26, 0x02, 0x79), (27, 0x02, 0x79), (28, 0x03, 0x79),
        (25, 0x02, 0x7a), (26, 0x02, 0x7a), (27, 0x02, 0x7a), (28, 0x03, 0x7a),
    ],
    [
        (29, 0x02, 0x26), (30, 0x03, 0x26), (29, 0x02, 0x2a), (30, 0x03, 0x2a),
        (29, 0x02, 0x2c), (30, 0x03, 0x2c), (29, 0x02, 0x3b), (30, 0x03, 0x3b),
        (29, 0x02, 0x58), (30, 0x03, 0x58), (29, 0x02, 0x5a), (30, 0x03, 0x5a),
        (87, 0x00, 0x00), (88, 0x00, 0x00), (89, 0x00, 0x00), (90, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x00), (18, 0x02, 0x00), (19, 0x02, 0x00), (20, 0x02, 0x00),
        (21, 0x02, 0x00), (22, 0x02, 0x00), (23, 0x02, 0x00), (24, 0x03, 0x00),
        (17, 0x02, 0x24), (18, 0x02, 0x24), (19, 0x02, 0x24), (20, 0x02, 0x24),
        (21, 0x02, 0x24), (22, 0x02, 0x24), (23, 0x02, 0x24), (24, 0x03, 0x24),
    ],
    [
        (17, 0x02, 0x40), (18, 0x02, 0x40), (19, 0x02, 0x40), (20, 0x02, 0x40),
        (21, 0x02, 0x40), (22, 0x02, 0x40), (23, 0x02, 0x40), (24, 0x03, 0x40),
        (17, 0x02, 0x5b), (18, 0x02, 0x5b), (19, 0x02, 0x5b), (20, 0x02, 0x5b),
        (21, 0x02, 0x5b), (22, 0x02, 0x5b), (23, 0x02, 0x5b), (24, 0x03, 0x5b),
    ],
    [
        (17, 0x02, 0x5d), (18, 0x02, 0x5d), (19, 0x02, 0x5d), (20, 0x02, 0x5d),
        (21, 0x02, 0x5d), (22, 0x02, 0x5d), (23, 0x02, 0x5d), (24, 0x03, 0x5d),
        (17, 0x02, 0x7e), (18, 0x02, 0x7e), (19, 0x02, 0x7e), (20, 0x02, 0x7e),
        (21, 0x02, 0x7e), (22, 0x02, 0x7e), (23, 0x02, 0x7e), (24, 0x03, 0x7e),
    ],
    [
        (25, 0x02, 0x5e), (26, 0x02, 0x5e), (27, 0x02, 0x5e), (28, 0x03, 0x5e),
        (25, 0x02, 0x7d), (26, 0x02, 0x7d), (27, 0x02, 0x7d), (28, 0x03, 0x7d),
        (29, 0x02, 0x3c), (30, 0x03, 0x3c), (29, 0x02, 0x60), (30, 0x03, 0x60),
        (29, 0x02, 0x7b), (30, 0x03, 0x7b), (91, 0x00, 0x00), (92, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x23), (18, 0x02, 0x23), (19, 0x02, 0x23), (20, 0x02, 0x23),
        (21, 0x02, 0x23), (22, 0x02, 0x23), (23, 0x02, 0x23), (24, 0x03, 0x23),
        (17, 0x02, 0x3e), (18, 0x02, 0x3e), (19, 0x02, 0x3e), (20, 0x02, 0x3e),
        (21, 0x02, 0x3e), (22, 0x02, 0x3e), (23, 0x02, 0x3e), (24, 0x03, 0x3e),
    ],
    [
        (25, 0x02, 0x00), (26, 0x02, 0x00), (27, 0x02, 0x00), (28, 0x03, 0x00),
        (25, 0x02, 0x24), (26, 0x02, 0x24), (27, 0x02, 0x24), (28, 0x03, 0x24),
        (25, 0x02, 0x40), (26, 0x02, 0x40), (27, 0x02, 0x40), (28, 0x03, 0x40),
        (25, 0x02, 0x5b), (26, 0x02, 0x5b), (27, 0x02, 0x5b), (28, 0x03, 0x5b),
    ],
    [
        (25, 0x02, 0x5d), (26, 0x02, 0x5d), (27, 0x02, 0x5d), (28, 0x03, 0x5d),
        (25, 0x02, 0x7e), (26, 0x02, 0x7e), (27, 0x02, 0x7e), (28, 0x03, 0x7e),
        (29, 0x02, 0x5e), (30, 0x03, 0x5e), (29, 0x02, 0x7d), (30, 0x03, 0x7d),
        (0, 0x03, 0x3c), (0, 0x03, 0x60), (0, 0x03, 0x7b), (93, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x27), (18, 0x02, 0x27), (19, 0x02, 0x27), (20, 0x02, 0x27),
        (21, 0x02, 0x27), (22, 0x02, 0x27), (23, 0x02, 0x27), (24, 0x03, 0x27),
        (17, 0x02, 0x2b), (18, 0x02, 0x2b), (19, 0x02, 0x2b), (20, 0x02, 0x2b),
        (21, 0x02, 0x2b), (22, 0x02, 0x2b), (23, 0x02, 0x2b), (24, 0x03, 0x2b),
    ],
    [
        (17, 0x02, 0x7c), (18, 0x02, 0x7c), (19, 0x02, 0x7c), (20, 0x02, 0x7c),
        (21, 0x02, 0x7c), (22, 0x02, 0x7c), (23, 0x02, 0x7c), (24, 0x03, 0x7c),
        (25, 0x02, 0x23), (26, 0x02, 0x23), (27, 0x02, 0x23), (28, 0x03, 0x23),
        (25, 0x02, 0x3e), (26, 0x02, 0x3e), (27, 0x02, 0x3e), (28, 0x03, 0x3e),
    ],
    [
        (29, 0x02, 0x00), (30, 0x03, 0x00), (29, 0x02, 0x24), (30, 0x03, 0x24),
        (29, 0x02, 0x40), (30, 0x03, 0x40), (29, 0x02, 0x5b), (30, 0x03, 0x5b),
        (29, 0x02, 0x5d), (30, 0x03, 0x5d), (29, 0x02, 0x7e), (30, 0x03, 0x7e),
        (0, 0x03, 0x5e), (0, 0x03, 0x7d), (94, 0x00, 0x00), (95, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x21), (18, 0x02, 0x21), (19, 0x02, 0x21), (20, 0x02, 0x21),
        (21, 0x02, 0x21), (22, 0x02, 0x21), (23, 0x02, 0x21), (24, 0x03, 0x21),
        (17, 0x02, 0x22), (18, 0x02, 0x22), (19, 0x02, 0x22), (20, 0x02, 0x22),
        (21, 0x02, 0x22), (22, 0x02, 0x22), (23, 0x02, 0x22), (24, 0x03, 0x22),
    ],
    [
        (17, 0x02, 0x28), (18, 0x02, 0x28), (19, 0x02, 0x28), (20, 0x02, 0x28),
        (21, 0x02, 0x28), (22, 0x02, 0x28), (23, 0x02, 0x28), (24, 0x03, 0x28),
        (17, 0x02, 0x29), (18, 0x02, 0x29), (19, 0x02, 0x29), (20, 0x02, 0x29),
        (21, 0x02, 0x29), (22, 0x02, 0x29), (23, 0x02, 0x29), (24, 0x03, 0x29),
    ],
    [
        (17, 0x02, 0x3f), (18, 0x02, 0x3f), (19, 0x02, 0x3f), (20, 0x02, 0x3f),
        (21, 0x02, 0x3f), (22, 0x02, 0x3f), (23, 0x02, 0x3f), (24, 0x03, 0x3f),
        (25, 0x02, 0x27), (26, 0x02, 0x27), (27, 0x02, 0x27), (28, 0x03, 0x27),
        (25, 0x02, 0x2b), (26, 0x02, 0x2b), (27, 0x02, 0x2b), (28, 0x03, 0x2b),
    ],
    [
        (25, 0x02, 0x7c), (26, 0x02, 0x7c), (27, 0x02, 0x7c), (28, 0x03, 0x7c),
        (29, 0x02, 0x23), (30, 0x03, 0x23), (29, 0x02, 0x3e), (30, 0x03, 0x3e),
        (0, 0x03, 0x00), (0, 0x03, 0x24), (0, 0x03, 0x40), (0, 0x03, 0x5b),
        (0, 0x03, 0x5d), (0, 0x03, 0x7e), (96, 0x00, 0x00), (97, 0x00, 0x00),
    ],
    [
        (29, 0x02, 0x5c), (30, 0x03, 0x5c), (29, 0x02, 0xc3), (30, 0x03, 0xc3),
        (29, 0x02, 0xd0), (30, 0x03, 0xd0), (0, 0x03, 0x80), (0, 0x03, 0x82),
        (0, 0x03, 0x83), (0, 0x03, 0xa2), (0, 0x03, 0xb8), (0, 0x03, 0xc2),
        (0, 0x03, 0xe0), (0, 0x03, 0xe2), (98, 0x00, 0x00), (99, 0x00, 0x00),
    ],
    [
        (100, 0x00, 0x00), (101, 0x00, 0x00), (102, 0x00, 0x00), (103, 0x00, 0x00),
        (104, 0x00, 0x00), (105, 0x00, 0x00), (106, 0x00, 0x00), (107, 0x00, 0x00),
        (108, 0x00, 0x00), (109, 0x00, 0x00), (110, 0x00, 0x00), (111, 0x00, 0x00),
        (112, 0x00, 0x00), (113, 0x00, 0x00), (114, 0x00, 0x00), (115, 0x00, 0x00),
    ],
    [
        (0, 0x03, 0x5c), (0, 0x03, 0xc3), (0, 0x03, 0xd0), (116, 0x00, 0x00),
        (117, 0x00, 0x00), (118, 0x00, 0x00), (119, 0x00, 0x00), (120, 0x00, 0x00),
        (121, 0x00, 0x00), (122, 0x00, 0x00), (123, 0x00, 0x00), (124, 0x00, 0x00),
        (125, 0x00, 0x00), (126, 0x00, 0x00), (127, 0x00, 0x00), (128, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x3c), (18, 0x02, 0x3c), (19, 0x02, 0x3c), (20, 0x02, 0x3c),
        (21, 0x02, 0x3c), (22, 0x02, 0x3c), (23, 0x02, 0x3c), (24, 0x03, 0x3c),
        (17, 0x02, 0x60), (18, 0x02, 0x60), (19, 0x02, 0x60), (20, 0x02, 0x60),
        (21, 0x02, 0x60), (22, 0x02, 0x60), (23, 0x02, 0x60), (24, 0x03, 0x60),
    ],
    [
        (17, 0x02, 0x7b), (18, 0x02, 0x7b), (19, 0x02, 0x7b), (20, 0x02, 0x7b),
        (21, 0x02, 0x7b), (22, 0x02, 0x7b), (23, 0x02, 0x7b), (24, 0x03, 0x7b),
        (129, 0x00, 0x00), (130, 0x00, 0x00), (131, 0x00, 0x00), (132, 0x00, 0x00),
        (133, 0x00, 0x00), (134, 0x00, 0x00), (135, 0x00, 0x00), (136, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x5e), (18, 0x02, 0x5e), (19, 0x02, 0x5e), (20, 0x02, 0x5e),
        (21, 0x02, 0x5e), (22, 0x02, 0x5e), (23, 0x02, 0x5e), (24, 0x03, 0x5e),
        (17, 0x02, 0x7d), (18, 0x02, 0x7d), (19, 0x02, 0x7d), (20, 0x02, 0x7d),
        (21, 0x02, 0x7d), (22, 0x02, 0x7d), (23, 0x02, 0x7d), (24, 0x03, 0x7d),
    ],
    [
        (25, 0x02, 0x3c), (26, 0x02, 0x3c), (27, 0x02, 0x3c), (28, 0x03, 0x3c),
        (25, 0x02, 0x60), (26, 0x02, 0x60), (27, 0x02, 0x60), (28, 0x03, 0x60),
        (25, 0x02, 0x7b), (26, 0x02, 0x7b), (27, 0x02, 0x7b), (28, 0x03, 0x7b),
        (137, 0x00, 0x00), (138, 0x00, 0x00), (139, 0x00, 0x00), (140, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x99), (18, 0x02, 0x99), (19, 0x02, 0x99), (20, 0x02, 0x99),
        (21, 0x02, 0x99), (22, 0x02, 0x99), (23, 0x02, 0x99), (24, 0x03, 0x99),
        (17, 0x02, 0xa1), (18, 0x02, 0xa1), (19, 0x02, 0xa1), (20, 0x02, 0xa1),
        (21, 0x02, 0xa1), (22, 0x02, 0xa1), (23, 0x02, 0xa1), (24, 0x03, 0xa1),
    ],
    [
        (17, 0x02, 0xa7), (18, 0x02, 0xa7), (19, 0x02, 0xa7), (20, 0x02, 0xa7),
        (21, 0x02, 0xa7), (22, 0x02, 0xa7), (23, 0x02, 0xa7), (24, 0x03, 0xa7),
        (17, 0x02, 0xac), (18, 0x02, 0xac), (19, 0x02, 0xac), (20, 0x02, 0xac),
        (21, 0x02, 0xac), (22, 0x02, 0xac), (23, 0x02, 0xac), (24, 0x03, 0xac),
    ],
    [
        (17, 0x02, 0xb0), (18, 0x02, 0xb0), (19, 0x02, 0xb0), (20, 0x02, 0xb0),
        (21, 0x02, 0xb0), (22, 0x02, 0xb0), (23, 0x02, 0xb0), (24, 0x03, 0xb0),
        (17, 0x02, 0xb1), (18, 0x02, 0xb1), (19, 0x02, 0xb1), (20, 0x02, 0xb1),
        (21, 0x02, 0xb1), (22, 0x02, 0xb1), (23, 0x02, 0xb1), (24, 0x03, 0xb1),
    ],
    [
        (17, 0x02, 0xb3), (18, 0x02, 0xb3), (19, 0x02, 0xb3), (20, 0x02, 0xb3),
        (21, 0x02, 0xb3), (22, 0x02, 0xb3), (23, 0x02, 0xb3), (24, 0x03, 0xb3),
        (17, 0x02, 0xd1), (18, 0x02, 0xd1), (19, 0x02, 0xd1), (20, 0x02, 0xd1),
        (21, 0x02, 0xd1), (22, 0x02, 0xd1), (23, 0x02, 0xd1), (24, 0x03, 0xd1),
    ],
    [
        (17, 0x02, 0xd8), (18, 0x02, 0xd8), (19, 0x02, 0xd8), (20, 0x02, 0xd8),
        (21, 0x02, 0xd8), (22, 0x02, 0xd8), (23, 0x02, 0xd8), (24, 0x03, 0xd8),
        (17, 0x02, 0xd9), (18, 0x02, 0xd9), (19, 0x02, 0xd9), (20, 0x02, 0xd9),
        (21, 0x02, 0xd9), (22, 0x02, 0xd9), (23, 0x02, 0xd9), (24, 0x03, 0xd9),
    ],
    [
        (17, 0x02, 0xe3), (18, 0x02, 0xe3), (19, 0x02, 0xe3), (20, 0x02, 0xe3),
        (21, 0x02, 0xe3), (22, 0x02, 0xe3), (23, 0x02, 0xe3), (24, 0x03, 0xe3),
        (17, 0x02, 0xe5), (18, 0x02, 0xe5), (19, 0x02, 0xe5), (20, 0x02, 0xe5),
        (21, 0x02, 0xe5), (22, 0x02, 0xe5), (23, 0x02, 0xe5), (24, 0x03, 0xe5),
    ],
    [
        (17, 0x02, 0xe6), (18, 0x02, 0xe6), (19, 0x02, 0xe6), (20, 0x02, 0xe6),
        (21, 0x02, 0xe6), (22, 0x02, 0xe6), (23, 0x02, 0xe6), (24, 0x03, 0xe6),
        (25, 0x02, 0x81), (26, 0x02, 0x81), (27, 0x02, 0x81), (28, 0x03, 0x81),
        (25, 0x02, 0x84), (26, 0x02, 0x84), (27, 0x02, 0x84), (28, 0x03, 0x84),
    ],
    [
        (25, 0x02, 0x85), (26, 0x02, 0x85), (27, 0x02, 0x85), (28, 0x03, 0x85),
        (25, 0x02, 0x86), (26, 0x02, 0x86), (27, 0x02, 0x86), (28, 0x03, 0x86),
        (25, 0x02, 0x88), (26, 0x02, 0x88), (27, 0x02, 0x88), (28, 0x03, 0x88),
        (25, 0x02, 0x92), (26, 0x02, 0x92), (27, 0x02, 0x92), (28, 0x03, 0x92),
    ],
    [
        (25, 0x02, 0x9a), (26, 0x02, 0x9a), (27, 0x02, 0x9a), (28, 0x03, 0x9a),
        (25, 0x02, 0x9c), (26, 0x02, 0x9c), (27, 0x02, 0x9c), (28, 0x03, 0x9c),
        (25, 0x02, 0xa0), (26, 0x02, 0xa0), (27, 0x02, 0xa0), (28, 0x03, 0xa0),
        (25, 0x02, 0xa3), (26, 0x02, 0xa3), (27, 0x02, 0xa3), (28, 0x03, 0xa3),
    ],
    [
        (25, 0x02, 0xa4), (26, 0x02, 0xa4), (27, 0x02, 0xa4), (28, 0x03, 0xa4),
        (25, 0x02, 0xa9), (26, 0x02, 0xa9), (27, 0x02, 0xa9), (28, 0x03, 0xa9),
        (25, 0x02, 0xaa), (26, 0x02, 0xaa), (27, 0x02, 0xaa), (28, 0x03, 0xaa),
        (25, 0x02, 0xad), (26, 0x02, 0xad), (27, 0x02, 0xad), (28, 0x03, 0xad),
    ],
    [
        (25, 0x02, 0xb2), (26, 0x02, 0xb2), (27, 0x02, 0xb2), (28, 0x03, 0xb2),
        (25, 0x02, 0xb5), (26, 0x02, 0xb5), (27, 0x02, 0xb5), (28, 0x03, 0xb5),
        (25, 0x02, 0xb9), (26, 0x02, 0xb9), (27, 0x02, 0xb9), (28, 0x03, 0xb9),
        (25, 0x02, 0xba), (26, 0x02, 0xba), (27, 0x02, 0xba), (28, 0x03, 0xba),
    ],
    [
        (25, 0x02, 0xbb), (26, 0x02, 0xbb), (27, 0x02, 0xbb), (28, 0x03, 0xbb),
        (25, 0x02, 0xbd), (26, 0x02, 0xbd), (27, 0x02, 0xbd), (28, 0x03, 0xbd),
        (25, 0x02, 0xbe), (26, 0x02, 0xbe), (27, 0x02, 0xbe), (28, 0x03, 0xbe),
        (25, 0x02, 0xc4), (26, 0x02, 0xc4), (27, 0x02, 0xc4), (28, 0x03, 0xc4),
    ],
    [
        (25, 0x02, 0xc6), (26, 0x02, 0xc6), (27, 0x02, 0xc6), (28, 0x03, 0xc6),
        (25, 0x02, 0xe4), (26, 0x02, 0xe4), (27, 0x02, 0xe4), (28, 0x03, 0xe4),
        (25, 0x02, 0xe8), (26, 0x02, 0xe8), (27, 0x02, 0xe8), (28, 0x03, 0xe8),
        (25, 0x02, 0xe9), (26, 0x02, 0xe9), (27, 0x02, 0xe9), (28, 0x03, 0xe9),
    ],
    [
        (29, 0x02, 0x01), (30, 0x03, 0x01), (29, 0x02, 0x87), (30, 0x03, 0x87),
        (29, 0x02, 0x89), (30, 0x03, 0x89), (29, 0x02, 0x8a), (30, 0x03, 0x8a),
        (29, 0x02, 0x8b), (30, 0x03, 0x8b), (29, 0x02, 0x8c), (30, 0x03, 0x8c),
        (29, 0x02, 0x8d), (30, 0x03, 0x8d), (29, 0x02, 0x8f), (30, 0x03, 0x8f),
    ],
    [
        (29, 0x02, 0x93), (30, 0x03, 0x93), (29, 0x02, 0x95), (30, 0x03, 0x95),
        (29, 0x02, 0x96), (30, 0x03, 0x96), (29, 0x02, 0x97), (30, 0x03, 0x97),
        (29, 0x02, 0x98), (30, 0x03, 0x98), (29, 0x02, 0x9b), (30, 0x03, 0x9b),
        (29, 0x02, 0x9d), (30, 0x03, 0x9d), (29, 0x02, 0x9e), (30, 0x03, 0x9e),
    ],
    [
        (29, 0x02, 0xa5), (30, 0x03, 0xa5), (29, 0x02, 0xa6), (30, 0x03, 0xa6),
        (29, 0x02, 0xa8), (30, 0x03, 0xa8), (29, 0x02, 0xae), (30, 0x03, 0xae),
        (29, 0x02, 0xaf), (30, 0x03, 0xaf), (29, 0x02, 0xb4), (30, 0x03, 0xb4),
        (29, 0x02, 0xb6), (30, 0x03, 0xb6), (29, 0x02, 0xb7), (30, 0x03, 0xb7),
    ],
    [
        (29, 0x02, 0xbc), (30, 0x03, 0xbc), (29, 0x02, 0xbf), (30, 0x03, 0xbf),
        (29, 0x02, 0xc5), (30, 0x03, 0xc5), (29, 0x02, 0xe7), (30, 0x03, 0xe7),
        (29, 0x02, 0xef), (30, 0x03, 0xef), (0, 0x03, 0x09), (0, 0x03, 0x8e),
        (0, 0x03, 0x90), (0, 0x03, 0x91), (0, 0x03, 0x94), (0, 0x03, 0x9f),
    ],
    [
        (0, 0x03, 0xab), (0, 0x03, 0xce), (0, 0x03, 0xd7), (0, 0x03, 0xe1),
        (0, 0x03, 0xec), (0, 0x03, 0xed), (141, 0x00, 0x00), (142, 0x00, 0x00),
        (143, 0x00, 0x00), (144, 0x00, 0x00), (145, 0x00, 0x00), (146, 0x00, 0x00),
        (147, 0x00, 0x00), (148, 0x00, 0x00), (149, 0x00, 0x00), (150, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x80), (18, 0x02, 0x80), (19, 0x02, 0x80), (20, 0x02, 0x80),
        (21, 0x02, 0x80), (22, 0x02, 0x80), (23, 0x02, 0x80), (24, 0x03, 0x80),
        (17, 0x02, 0x82), (18, 0x02, 0x82), (19, 0x02, 0x82), (20, 0x02, 0x82),
        (21, 0x02, 0x82), (22, 0x02, 0x82), (23, 0x02, 0x82), (24, 0x03, 0x82),
    ],
    [
        (17, 0x02, 0x83), (18, 0x02, 0x83), (19, 0x02, 0x83), (20, 0x02, 0x83),
        (21, 0x02, 0x83), (22, 0x02, 0x83), (23, 0x02, 0x83), (24, 0x03, 0x83),
        (17, 0x02, 0xa2), (18, 0x02, 0xa2), (19, 0x02, 0xa2), (20, 0x02, 0xa2),
        (21, 0x02, 0xa2), (22, 0x02, 0xa2), (23, 0x02, 0xa2), (24, 0x03, 0xa2),
    ],
    [
        (17, 0x02, 0xb8), (18, 0x02, 0xb8), (19, 0x02, 0xb8), (20, 0x02, 0xb8),
        (21, 0x02, 0xb8), (22, 0x02, 0xb8), (23, 0x02, 0xb8), (24, 0x03, 0xb8),
        (17, 0x02, 0xc2), (18, 0x02, 0xc2), (19, 0x02, 0xc2), (20, 0x02, 0xc2),
        (21, 0x02, 0xc2), (22, 0x02, 0xc2), (23, 0x02, 0xc2), (24, 0x03, 0xc2),
    ],
    [
        (17, 0x02, 0xe0), (18, 0x02, 0xe0), (19, 0x02, 0xe0), (20, 0x02, 0xe0),
        (21, 0x02, 0xe0), (22, 0x02, 0xe0), (23, 0x02, 0xe0), (24, 0x03, 0xe0),
        (17, 0x02, 0xe2), (18, 0x02, 0xe2), (19, 0x02, 0xe2), (20, 0x02, 0xe2),
        (21, 0x02, 0xe2), (22, 0x02, 0xe2), (23, 0x02, 0xe2), (24, 0x03, 0xe2),
    ],
    [
        (25, 0x02, 0x99), (26, 0x02, 0x99), (27, 0x02, 0x99), (28, 0x03, 0x99),
        (25, 0x02, 0xa1), (26, 0x02, 0xa1), (27, 0x02, 0xa1), (28, 0x03, 0xa1),
        (25, 0x02, 0xa7), (26, 0x02, 0xa7), (27, 0x02, 0xa7), (28, 0x03, 0xa7),
        (25, 0x02, 0xac), (26, 0x02, 0xac), (27, 0x02, 0xac), (28, 0x03, 0xac),
    ],
    [
        (25, 0x02, 0xb0), (26, 0x02, 0xb0), (27, 0x02, 0xb0), (28, 0x03, 0xb0),
        (25, 0x02, 0xb1), (26, 0x02, 0xb1), (27, 0x02, 0xb1), (28, 0x03, 0xb1),
        (25, 0x02, 0xb3), (26, 0x02, 0xb3), (27, 0x02, 0xb3), (28, 0x03, 0xb3),
        (25, 0x02, 0xd1), (26, 0x02, 0xd1), (27, 0x02, 0xd1), (28, 0x03, 0xd1),
    ],
    [
        (25, 0x02, 0xd8), (26, 0x02, 0xd8), (27, 0x02, 0xd8), (28, 0x03, 0xd8),
        (25, 0x02, 0xd9), (26, 0x02, 0xd9), (27, 0x02, 0xd9), (28, 0x03, 0xd9),
        (25, 0x02, 0xe3), (26, 0x02, 0xe3), (27, 0x02, 0xe3), (28, 0x03, 0xe3),
        (25, 0x02, 0xe5), (26, 0x02, 0xe5), (27, 0x02, 0xe5), (28, 0x03, 0xe5),
    ],
    [
        (25, 0x02, 0xe6), (26, 0x02, 0xe6), (27, 0x02, 0xe6), (28, 0x03, 0xe6),
        (29, 0x02, 0x81), (30, 0x03, 0x81), (29, 0x02, 0x84), (30, 0x03, 0x84),
        (29, 0x02, 0x85), (30, 0x03, 0x85), (29, 0x02, 0x86), (30, 0x03, 0x86),
        (29, 0x02, 0x88), (30, 0x03, 0x88), (29, 0x02, 0x92), (30, 0x03, 0x92),
    ],
    [
        (29, 0x02, 0x9a), (30, 0x03, 0x9a), (29, 0x02, 0x9c), (30, 0x03, 0x9c),
        (29, 0x02, 0xa0), (30, 0x03, 0xa0), (29, 0x02, 0xa3), (30, 0x03, 0xa3),
        (29, 0x02, 0xa4), (30, 0x03, 0xa4), (29, 0x02, 0xa9), (30, 0x03, 0xa9),
        (29, 0x02, 0xaa), (30, 0x03, 0xaa), (29, 0x02, 0xad), (30, 0x03, 0xad),
    ],
    [
        (29, 0x02, 0xb2), (30, 0x03, 0xb2), (29, 0x02, 0xb5), (30, 0x03, 0xb5),
        (29, 0x02, 0xb9), (30, 0x03, 0xb9), (29, 0x02, 0xba), (30, 0x03, 0xba),
        (29, 0x02, 0xbb), (30, 0x03, 0xbb), (29, 0x02, 0xbd), (30, 0x03, 0xbd),
        (29, 0x02, 0xbe), (30, 0x03, 0xbe), (29, 0x02, 0xc4), (30, 0x03, 0xc4),
    ],
    [
        (29, 0x02, 0xc6), (30, 0x03, 0xc6), (29, 0x02, 0xe4), (30, 0x03, 0xe4),
        (29, 0x02, 0xe8), (30, 0x03, 0xe8), (29, 0x02, 0xe9), (30, 0x03, 0xe9),
        (0, 0x03, 0x01), (0, 0x03, 0x87), (0, 0x03, 0x89), (0, 0x03, 0x8a),
        (0, 0x03, 0x8b), (0, 0x03, 0x8c), (0, 0x03, 0x8d), (0, 0x03, 0x8f),
    ],
    [
        (0, 0x03, 0x93), (0, 0x03, 0x95), (0, 0x03, 0x96), (0, 0x03, 0x97),
        (0, 0x03, 0x98), (0, 0x03, 0x9b), (0, 0x03, 0x9d), (0, 0x03, 0x9e),
        (0, 0x03, 0xa5), (0, 0x03, 0xa6), (0, 0x03, 0xa8), (0, 0x03, 0xae),
        (0, 0x03, 0xaf), (0, 0x03, 0xb4), (0, 0x03, 0xb6), (0, 0x03, 0xb7),
    ],
    [
        (0, 0x03, 0xbc), (0, 0x03, 0xbf), (0, 0x03, 0xc5), (0, 0x03, 0xe7),
        (0, 0x03, 0xef), (151, 0x00, 0x00), (152, 0x00, 0x00), (153, 0x00, 0x00),
        (154, 0x00, 0x00), (155, 0x00, 0x00), (156, 0x00, 0x00), (157, 0x00, 0x00),
        (158, 0x00, 0x00), (159, 0x00, 0x00), (160, 0x00, 0x00), (161, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x5c), (18, 0x02, 0x5c), (19, 0x02, 0x5c), (20, 0x02, 0x5c),
        (21, 0x02, 0x5c), (22, 0x02, 0x5c), (23, 0x02, 0x5c), (24, 0x03, 0x5c),
        (17, 0x02, 0xc3), (18, 0x02, 0xc3), (19, 0x02, 0xc3), (20, 0x02, 0xc3),
        (21, 0x02, 0xc3), (22, 0x02, 0xc3), (23, 0x02, 0xc3), (24, 0x03, 0xc3),
    ],
    [
        (17, 0x02, 0xd0), (18, 0x02, 0xd0), (19, 0x02, 0xd0), (20, 0x02, 0xd0),
        (21, 0x02, 0xd0), (22, 0x02, 0xd0), (23, 0x02, 0xd0), (24, 0x03, 0xd0),
        (25, 0x02, 0x80), (26, 0x02, 0x80), (27, 0x02, 0x80), (28, 0x03, 0x80),
        (25, 0x02, 0x82), (26, 0x02, 0x82), (27, 0x02, 0x82), (28, 0x03, 0x82),
    ],
    [
        (25, 0x02, 0x83), (26, 0x02, 0x83), (27, 0x02, 0x83), (28, 0x03, 0x83),
        (25, 0x02, 0xa2), (26, 0x02, 0xa2), (27, 0x02, 0xa2), (28, 0x03, 0xa2),
        (25, 0x02, 0xb8), (26, 0x02, 0xb8), (27, 0x02, 0xb8), (28, 0x03, 0xb8),
        (25, 0x02, 0xc2), (26, 0x02, 0xc2), (27, 0x02, 0xc2), (28, 0x03, 0xc2),
    ],
    [
        (25, 0x02, 0xe0), (26, 0x02, 0xe0), (27, 0x02, 0xe0), (28, 0x03, 0xe0),
        (25, 0x02, 0xe2), (26, 0x02, 0xe2), (27, 0x02, 0xe2), (28, 0x03, 0xe2),
        (29, 0x02, 0x99), (30, 0x03, 0x99), (29, 0x02, 0xa1), (30, 0x03, 0xa1),
        (29, 0x02, 0xa7), (30, 0x03, 0xa7), (29, 0x02, 0xac), (30, 0x03, 0xac),
    ],
    [
        (29, 0x02, 0xb0), (30, 0x03, 0xb0), (29, 0x02, 0xb1), (30, 0x03, 0xb1),
        (29, 0x02, 0xb3), (30, 0x03, 0xb3), (29, 0x02, 0xd1), (30, 0x03, 0xd1),
        (29, 0x02, 0xd8), (30, 0x03, 0xd8), (29, 0x02, 0xd9), (30, 0x03, 0xd9),
        (29, 0x02, 0xe3), (30, 0x03, 0xe3), (29, 0x02, 0xe5), (30, 0x03, 0xe5),
    ],
    [
        (29, 0x02, 0xe6), (30, 0x03, 0xe6), (0, 0x03, 0x81), (0, 0x03, 0x84),
        (0, 0x03, 0x85), (0, 0x03, 0x86), (0, 0x03, 0x88), (0, 0x03, 0x92),
        (0, 0x03, 0x9a), (0, 0x03, 0x9c), (0, 0x03, 0xa0), (0, 0x03, 0xa3),
        (0, 0x03, 0xa4), (0, 0x03, 0xa9), (0, 0x03, 0xaa), (0, 0x03, 0xad),
    ],
    [
        (0, 0x03, 0xb2), (0, 0x03, 0xb5), (0, 0x03, 0xb9), (0, 0x03, 0xba),
        (0, 0x03, 0xbb), (0, 0x03, 0xbd), (0, 0x03, 0xbe), (0, 0x03, 0xc4),
        (0, 0x03, 0xc6), (0, 0x03, 0xe4), (0, 0x03, 0xe8), (0, 0x03, 0xe9),
        (162, 0x00, 0x00), (163, 0x00, 0x00), (164, 0x00, 0x00), (165, 0x00, 0x00),
    ],
    [
        (166, 0x00, 0x00), (167, 0x00, 0x00), (168, 0x00, 0x00), (169, 0x00, 0x00),
        (170, 0x00, 0x00), (171, 0x00, 0x00), (172, 0x00, 0x00), (173, 0x00, 0x00),
        (174, 0x00, 0x00), (175, 0x00, 0x00), (176, 0x00, 0x00), (177, 0x00, 0x00),
        (178, 0x00, 0x00), (179, 0x00, 0x00), (180, 0x00, 0x00), (181, 0x00, 0x00),
    ],
    [
        (25, 0x02, 0x5c), (26, 0x02, 0x5c), (27, 0x02, 0x5c), (28, 0x03, 0x5c),
        (25, 0x02, 0xc3), (26, 0x02, 0xc3), (27, 0x02, 0xc3), (28, 0x03, 0xc3),
        (25, 0x02, 0xd0), (26, 0x02, 0xd0), (27, 0x02, 0xd0), (28, 0x03, 0xd0),
        (29, 0x02, 0x80), (30, 0x03, 0x80), (29, 0x02, 0x82), (30, 0x03, 0x82),
    ],
    [
        (29, 0x02, 0x83), (30, 0x03, 0x83), (29, 0x02, 0xa2), (30, 0x03, 0xa2),
        (29, 0x02, 0xb8), (30, 0x03, 0xb8), (29, 0x02, 0xc2), (30, 0x03, 0xc2),
        (29, 0x02, 0xe0), (30, 0x03, 0xe0), (29, 0x02, 0xe2), (30, 0x03, 0xe2),
        (0, 0x03, 0x99), (0, 0x03, 0xa1), (0, 0x03, 0xa7), (0, 0x03, 0xac),
    ],
    [
        (0, 0x03, 0xb0), (0, 0x03, 0xb1), (0, 0x03, 0xb3), (0, 0x03, 0xd1),
        (0, 0x03, 0xd8), (0, 0x03, 0xd9), (0, 0x03, 0xe3), (0, 0x03, 0xe5),
        (0, 0x03, 0xe6), (182, 0x00, 0x00), (183, 0x00, 0x00), (184, 0x00, 0x00),
        (185, 0x00, 0x00), (186, 0x00, 0x00), (187, 0x00, 0x00), (188, 0x00, 0x00),
    ],
    [
        (189, 0x00, 0x00), (190, 0x00, 0x00), (191, 0x00, 0x00), (192, 0x00, 0x00),
        (193, 0x00, 0x00), (194, 0x00, 0x00), (195, 0x00, 0x00), (196, 0x00, 0x00),
        (197, 0x00, 0x00), (198, 0x00, 0x00), (199, 0x00, 0x00), (200, 0x00, 0x00),
        (201, 0x00, 0x00), (202, 0x00, 0x00), (203, 0x00, 0x00), (204, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0xc7), (18, 0x02, 0xc7), (19, 0x02, 0xc7), (20, 0x02, 0xc7),
        (21, 0x02, 0xc7), (22, 0x02, 0xc7), (23, 0x02, 0xc7), (24, 0x03, 0xc7),
        (17, 0x02, 0xcf), (18, 0x02, 0xcf), (19, 0x02, 0xcf), (20, 0x02, 0xcf),
        (21, 0x02, 0xcf), (22, 0x02, 0xcf), (23, 0x02, 0xcf), (24, 0x03, 0xcf),
    ],
    [
        (17, 0x02, 0xea), (18, 0x02, 0xea), (19, 0x02, 0xea), (20, 0x02, 0xea),
        (21, 0x02, 0xea), (22, 0x02, 0xea), (23, 0x02, 0xea), (24, 0x03, 0xea),
        (17, 0x02, 0xeb), (18, 0x02, 0xeb), (19, 0x02, 0xeb), (20, 0x02, 0xeb),
        (21, 0x02, 0xeb), (22, 0x02, 0xeb), (23, 0x02, 0xeb), (24, 0x03, 0xeb),
    ],
    [
        (25, 0x02, 0xc0), (26, 0x02, 0xc0), (27, 0x02, 0xc0), (28, 0x03, 0xc0),
        (25, 0x02, 0xc1), (26, 0x02, 0xc1), (27, 0x02, 0xc1), (28, 0x03, 0xc1),
        (25, 0x02, 0xc8), (26, 0x02, 0xc8), (27, 0x02, 0xc8), (28, 0x03, 0xc8),
        (25, 0x02, 0xc9), (26, 0x02, 0xc9), (27, 0x02, 0xc9), (28, 0x03, 0xc9),
    ],
    [
        (25, 0x02, 0xca), (26, 0x02, 0xca), (27, 0x02, 0xca), (28, 0x03, 0xca),
        (25, 0x02, 0xcd), (26, 0x02, 0xcd), (27, 0x02, 0xcd), (28, 0x03, 0xcd),
        (25, 0x02, 0xd2), (26, 0x02, 0xd2), (27, 0x02, 0xd2), (28, 0x03, 0xd2),
        (25, 0x02, 0xd5), (26, 0x02, 0xd5), (27, 0x02, 0xd5), (28, 0x03, 0xd5),
    ],
    [
        (25, 0x02, 0xda), (26, 0x02, 0xda), (27, 0x02, 0xda), (28, 0x03, 0xda),
        (25, 0x02, 0xdb), (26, 0x02, 0xdb), (27, 0x02, 0xdb), (28, 0x03, 0xdb),
        (25, 0x02, 0xee), (26, 0x02, 0xee), (27, 0x02, 0xee), (28, 0x03, 0xee),
        (25, 0x02, 0xf0), (26, 0x02, 0xf0), (27, 0x02, 0xf0), (28, 0x03, 0xf0),
    ],
    [
        (25, 0x02, 0xf2), (26, 0x02, 0xf2), (27, 0x02, 0xf2), (28, 0x03, 0xf2),
        (25, 0x02, 0xf3), (26, 0x02, 0xf3), (27, 0x02, 0xf3), (28, 0x03, 0xf3),
        (25, 0x02, 0xff), (26, 0x02, 0xff), (27, 0x02, 0xff), (28, 0x03, 0xff),
        (29, 0x02, 0xcb), (30, 0x03, 0xcb), (29, 0x02, 0xcc), (30, 0x03, 0xcc),
    ],
    [
        (29, 0x02, 0xd3), (30, 0x03, 0xd3), (29, 0x02, 0xd4), (30, 0x03, 0xd4),
        (29, 0x02, 0xd6), (30, 0x03, 0xd6), (29, 0x02, 0xdd), (30, 0x03, 0xdd),
        (29, 0x02, 0xde), (30, 0x03, 0xde), (29, 0x02, 0xdf), (30, 0x03, 0xdf),
        (29, 0x02, 0xf1), (30, 0x03, 0xf1), (29, 0x02, 0xf4), (30, 0x03, 0xf4),
    ],
    [
        (29, 0x02, 0xf5), (30, 0x03, 0xf5), (29, 0x02, 0xf6), (30, 0x03, 0xf6),
        (29, 0x02, 0xf7), (30, 0x03, 0xf7), (29, 0x02, 0xf8), (30, 0x03, 0xf8),
        (29, 0x02, 0xfa), (30, 0x03, 0xfa), (29, 0x02, 0xfb), (30, 0x03, 0xfb),
        (29, 0x02, 0xfc), (30, 0x03, 0xfc), (29, 0x02, 0xfd), (30, 0x03, 0xfd),
    ],
    [
        (29, 0x02, 0xfe), (30, 0x03, 0xfe), (0, 0x03, 0x02), (0, 0x03, 0x03),
        (0, 0x03, 0x04), (0, 0x03, 0x05), (0, 0x03, 0x06), (0, 0x03, 0x07),
        (0, 0x03, 0x08), (0, 0x03, 0x0b), (0, 0x03, 0x0c), (0, 0x03, 0x0e),
        (0, 0x03, 0x0f), (0, 0x03, 0x10), (0, 0x03, 0x11), (0, 0x03, 0x12),
    ],
    [
        (0, 0x03, 0x13), (0, 0x03, 0x14), (0, 0x03, 0x15), (0, 0x03, 0x17),
        (0, 0x03, 0x18), (0, 0x03, 0x19), (0, 0x03, 0x1a), (0, 0x03, 0x1b),
        (0, 0x03, 0x1c), (0, 0x03, 0x1d), (0, 0x03, 0x1e), (0, 0x03, 0x1f),
        (0, 0x03, 0x7f), (0, 0x03, 0xdc), (0, 0x03, 0xf9), (205, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x09), (18, 0x02, 0x09), (19, 0x02, 0x09), (20, 0x02, 0x09),
        (21, 0x02, 0x09), (22, 0x02, 0x09), (23, 0x02, 0x09), (24, 0x03, 0x09),
        (17, 0x02, 0x8e), (18, 0x02, 0x8e), (19, 0x02, 0x8e), (20, 0x02, 0x8e),
        (21, 0x02, 0x8e), (22, 0x02, 0x8e), (23, 0x02, 0x8e), (24, 0x03, 0x8e),
    ],
    [
        (17, 0x02, 0x90), (18, 0x02, 0x90), (19, 0x02, 0x90), (20, 0x02, 0x90),
        (21, 0x02, 0x90), (22, 0x02, 0x90), (23, 0x02, 0x90), (24, 0x03, 0x90),
        (17, 0x02, 0x91), (18, 0x02, 0x91), (19, 0x02, 0x91), (20, 0x02, 0x91),
        (21, 0x02, 0x91), (22, 0x02, 0x91), (23, 0x02, 0x91), (24, 0x03, 0x91),
    ],
    [
        (17, 0x02, 0x94), (18, 0x02, 0x94), (19, 0x02, 0x94), (20, 0x02, 0x94),
        (21, 0x02, 0x94), (22, 0x02, 0x94), (23, 0x02, 0x94), (24, 0x03, 0x94),
        (17, 0x02, 0x9f), (18, 0x02, 0x9f), (19, 0x02, 0x9f), (20, 0x02, 0x9f),
        (21, 0x02, 0x9f), (22, 0x02, 0x9f), (23, 0x02, 0x9f), (24, 0x03, 0x9f),
    ],
    [
        (17, 0x02, 0xab), (18, 0x02, 0xab), (19, 0x02, 0xab), (20, 0x02, 0xab),
        (21, 0x02, 0xab), (22, 0x02, 0xab), (23, 0x02, 0xab), (24, 0x03, 0xab),
        (17, 0x02, 0xce), (18, 0x02, 0xce), (19, 0x02, 0xce), (20, 0x02, 0xce),
        (21, 0x02, 0xce), (22, 0x02, 0xce), (23, 0x02, 0xce), (24, 0x03, 0xce),
    ],
    [
        (17, 0x02, 0xd7), (18, 0x02, 0xd7), (19, 0x02, 0xd7), (20, 0x02, 0xd7),
        (21, 0x02, 0xd7), (22, 0x02, 0xd7), (23, 0x02, 0xd7), (24, 0x03, 0xd7),
        (17, 0x02, 0xe1), (18, 0x02, 0xe1), (19, 0x02, 0xe1), (20, 0x02, 0xe1),
        (21, 0x02, 0xe1), (22, 0x02, 0xe1), (23, 0x02, 0xe1), (24, 0x03, 0xe1),
    ],
    [
        (17, 0x02, 0xec), (18, 0x02, 0xec), (19, 0x02, 0xec), (20, 0x02, 0xec),
        (21, 0x02, 0xec), (22, 0x02, 0xec), (23, 0x02, 0xec), (24, 0x03, 0xec),
        (17, 0x02, 0xed), (18, 0x02, 0xed), (19, 0x02, 0xed), (20, 0x02, 0xed),
        (21, 0x02, 0xed), (22, 0x02, 0xed), (23, 0x02, 0xed), (24, 0x03, 0xed),
    ],
    [
        (25, 0x02, 0xc7), (26, 0x02, 0xc7), (27, 0x02, 0xc7), (28, 0x03, 0xc7),
        (25, 0x02, 0xcf), (26, 0x02, 0xcf), (27, 0x02, 0xcf), (28, 0x03, 0xcf),
        (25, 0x02, 0xea), (26, 0x02, 0xea), (27, 0x02, 0xea), (28, 0x03, 0xea),
        (25, 0x02, 0xeb), (26, 0x02, 0xeb), (27, 0x02, 0xeb), (28, 0x03, 0xeb),
    ],
    [
        (29, 0x02, 0xc0), (30, 0x03, 0xc0), (29, 0x02, 0xc1), (30, 0x03, 0xc1),
        (29, 0x02, 0xc8), (30, 0x03, 0xc8), (29, 0x02, 0xc9), (30, 0x03, 0xc9),
        (29, 0x02, 0xca), (30, 0x03, 0xca), (29, 0x02, 0xcd), (30, 0x03, 0xcd),
        (29, 0x02, 0xd2), (30, 0x03, 0xd2), (29, 0x02, 0xd5), (30, 0x03, 0xd5),
    ],
    [
        (29, 0x02, 0xda), (30, 0x03, 0xda), (29, 0x02, 0xdb), (30, 0x03, 0xdb),
        (29, 0x02, 0xee), (30, 0x03, 0xee), (29, 0x02, 0xf0), (30, 0x03, 0xf0),
        (29, 0x02, 0xf2), (30, 0x03, 0xf2), (29, 0x02, 0xf3), (30, 0x03, 0xf3),
        (29, 0x02, 0xff), (30, 0x03, 0xff), (0, 0x03, 0xcb), (0, 0x03, 0xcc),
    ],
    [
        (0, 0x03, 0xd3), (0, 0x03, 0xd4), (0, 0x03, 0xd6), (0, 0x03, 0xdd),
        (0, 0x03, 0xde), (0, 0x03, 0xdf), (0, 0x03, 0xf1), (0, 0x03, 0xf4),
        (0, 0x03, 0xf5), (0, 0x03, 0xf6), (0, 0x03, 0xf7), (0, 0x03, 0xf8),
        (0, 0x03, 0xfa), (0, 0x03, 0xfb), (0, 0x03, 0xfc), (0, 0x03, 0xfd),
    ],
    [
        (0, 0x03, 0xfe), (206, 0x00, 0x00), (207, 0x00, 0x00), (208, 0x00, 0x00),
        (209, 0x00, 0x00), (210, 0x00, 0x00), (211, 0x00, 0x00), (212, 0x00, 0x00),
        (213, 0x00, 0x00), (214, 0x00, 0x00), (215, 0x00, 0x00), (216, 0x00, 0x00),
        (217, 0x00, 0x00), (218, 0x00, 0x00), (219, 0x00, 0x00), (220, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x01), (18, 0x02, 0x01), (19, 0x02, 0x01), (20, 0x02, 0x01),
        (21, 0x02, 0x01), (22, 0x02, 0x01), (23, 0x02, 0x01), (24, 0x03, 0x01),
        (17, 0x02, 0x87), (18, 0x02, 0x87), (19, 0x02, 0x87), (20, 0x02, 0x87),
        (21, 0x02, 0x87), (22, 0x02, 0x87), (23, 0x02, 0x87), (24, 0x03, 0x87),
    ],
    [
        (17, 0x02, 0x89), (18, 0x02, 0x89), (19, 0x02, 0x89), (20, 0x02, 0x89),
        (21, 0x02, 0x89), (22, 0x02, 0x89), (23, 0x02, 0x89), (24, 0x03, 0x89),
        (17, 0x02, 0x8a), (18, 0x02, 0x8a), (19, 0x02, 0x8a), (20, 0x02, 0x8a),
        (21, 0x02, 0x8a), (22, 0x02, 0x8a), (23, 0x02, 0x8a), (24, 0x03, 0x8a),
    ],
    [
        (17, 0x02, 0x8b), (18, 0x02, 0x8b), (19, 0x02, 0x8b), (20, 0x02, 0x8b),
        (21, 0x02, 0x8b), (22, 0x02, 0x8b), (23, 0x02, 0x8b), (24, 0x03, 0x8b),
        (17, 0x02, 0x8c), (18, 0x02, 0x8c), (19, 0x02, 0x8c), (20, 0x02, 0x8c),
        (21, 0x02, 0x8c), (22, 0x02, 0x8c), (23, 0x02, 0x8c), (24, 0x03, 0x8c),
    ],
    [
        (17, 0x02, 0x8d), (18, 0x02, 0x8d), (19, 0x02, 0x8d), (20, 0x02, 0x8d),
        (21, 0x02, 0x8d), (22, 0x02, 0x8d), (23, 0x02, 0x8d), (24, 0x03, 0x8d),
        (17, 0x02, 0x8f), (18, 0x02, 0x8f), (19, 0x02, 0x8f), (20, 0x02, 0x8f),
        (21, 0x02, 0x8f), (22, 0x02, 0x8f), (23, 0x02, 0x8f), (24, 0x03, 0x8f),
    ],
    [
        (17, 0x02, 0x93), (18, 0x02, 0x93), (19, 0x02, 0x93), (20, 0x02, 0x93),
        (21, 0x02, 0x93), (22, 0x02, 0x93), (23, 0x02, 0x93), (24, 0x03, 0x93),
        (17, 0x02, 0x95), (18, 0x02, 0x95), (19, 0x02, 0x95), (20, 0x02, 0x95),
        (21, 0x02, 0x95), (22, 0x02, 0x95), (23, 0x02, 0x95), (24, 0x03, 0x95),
    ],
    [
        (17, 0x02, 0x96), (18, 0x02, 0x96), (19, 0x02, 0x96), (20, 0x02, 0x96),
        (21, 0x02, 0x96), (22, 0x02, 0x96), (23, 0x02, 0x96), (24, 0x03, 0x96),
        (17, 0x02, 0x97), (18, 0x02, 0x97), (19, 0x02, 0x97), (20, 0x02, 0x97),
        (21, 0x02, 0x97), (22, 0x02, 0x97), (23, 0x02, 0x97), (24, 0x03, 0x97),
    ],
    [
        (17, 0x02, 0x98), (18, 0x02, 0x98), (19, 0x02, 0x98), (20, 0x02, 0x98),
        (21, 0x02, 0x98), (22, 0x02, 0x98), (23, 0x02, 0x98), (24, 0x03, 0x98),
        (17, 0x02, 0x9b), (18, 0x02, 0x9b), (19, 0x02, 0x9b), (20, 0x02, 0x9b),
        (21, 0x02, 0x9b), (22, 0x02, 0x9b), (23, 0x02, 0x9b), (24, 0x03, 0x9b),
    ],
    [
        (17, 0x02, 0x9d), (18, 0x02, 0x9d), (19, 0x02, 0x9d), (20, 0x02, 0x9d),
        (21, 0x02, 0x9d), (22, 0x02, 0x9d), (23, 0x02, 0x9d), (24, 0x03, 0x9d),
        (17, 0x02, 0x9e), (18, 0x02, 0x9e), (19, 0x02, 0x9e), (20, 0x02, 0x9e),
        (21, 0x02, 0x9e), (22, 0x02, 0x9e), (23, 0x02, 0x9e), (24, 0x03, 0x9e),
    ],
    [
        (17, 0x02, 0xa5), (18, 0x02, 0xa5), (19, 0x02, 0xa5), (20, 0x02, 0xa5),
        (21, 0x02, 0xa5), (22, 0x02, 0xa5), (23, 0x02, 0xa5), (24, 0x03, 0xa5),
        (17, 0x02, 0xa6), (18, 0x02, 0xa6), (19, 0x02, 0xa6), (20, 0x02, 0xa6),
        (21, 0x02, 0xa6), (22, 0x02, 0xa6), (23, 0x02, 0xa6), (24, 0x03, 0xa6),
    ],
    [
        (17, 0x02, 0xa8), (18, 0x02, 0xa8), (19, 0x02, 0xa8), (20, 0x02, 0xa8),
        (21, 0x02, 0xa8), (22, 0x02, 0xa8), (23, 0x02, 0xa8), (24, 0x03, 0xa8),
        (17, 0x02, 0xae), (18, 0x02, 0xae), (19, 0x02, 0xae), (20, 0x02, 0xae),
        (21, 0x02, 0xae), (22, 0x02, 0xae), (23, 0x02, 0xae), (24, 0x03, 0xae),
    ],
    [
        (17, 0x02, 0xaf), (18, 0x02, 0xaf), (19, 0x02, 0xaf), (20, 0x02, 0xaf),
        (21, 0x02, 0xaf), (22, 0x02, 0xaf), (23, 0x02, 0xaf), (24, 0x03, 0xaf),
        (17, 0x02, 0xb4), (18, 0x02, 0xb4), (19, 0x02, 0xb4), (20, 0x02, 0xb4),
        (21, 0x02, 0xb4), (22, 0x02, 0xb4), (23, 0x02, 0xb4), (24, 0x03, 0xb4),
    ],
    [
        (17, 0x02, 0xb6), (18, 0x02, 0xb6), (19, 0x02, 0xb6), (20, 0x02, 0xb6),
        (21, 0x02, 0xb6), (22, 0x02, 0xb6), (23, 0x02, 0xb6), (24, 0x03, 0xb6),
        (17, 0x02, 0xb7), (18, 0x02, 0xb7), (19, 0x02, 0xb7), (20, 0x02, 0xb7),
        (21, 0x02, 0xb7), (22, 0x02, 0xb7), (23, 0x02, 0xb7), (24, 0x03, 0xb7),
    ],
    [
        (17, 0x02, 0xbc), (18, 0x02, 0xbc), (19, 0x02, 0xbc), (20, 0x02, 0xbc),
        (21, 0x02, 0xbc), (22, 0x02, 0xbc), (23, 0x02, 0xbc), (24, 0x03, 0xbc),
        (17, 0x02, 0xbf), (18, 0x02, 0xbf), (19, 0x02, 0xbf), (20, 0x02, 0xbf),
        (21, 0x02, 0xbf), (22, 0x02, 0xbf), (23, 0x02, 0xbf), (24, 0x03, 0xbf),
    ],
    [
        (17, 0x02, 0xc5), (18, 0x02, 0xc5), (19, 0x02, 0xc5), (20, 0x02, 0xc5),
        (21, 0x02, 0xc5), (22, 0x02, 0xc5), (23, 0x02, 0xc5), (24, 0x03, 0xc5),
        (17, 0x02, 0xe7), (18, 0x02, 0xe7), (19, 0x02, 0xe7), (20, 0x02, 0xe7),
        (21, 0x02, 0xe7), (22, 0x02, 0xe7), (23, 0x02, 0xe7), (24, 0x03, 0xe7),
    ],
    [
        (17, 0x02, 0xef), (18, 0x02, 0xef), (19, 0x02, 0xef), (20, 0x02, 0xef),
        (21, 0x02, 0xef), (22, 0x02, 0xef), (23, 0x02, 0xef), (24, 0x03, 0xef),
        (25, 0x02, 0x09), (26, 0x02, 0x09), (27, 0x02, 0x09), (28, 0x03, 0x09),
        (25, 0x02, 0x8e), (26, 0x02, 0x8e), (27, 0x02, 0x8e), (28, 0x03, 0x8e),
    ],
    [
        (25, 0x02, 0x90), (26, 0x02, 0x90), (27, 0x02, 0x90), (28, 0x03, 0x90),
        (25, 0x02, 0x91), (26, 0x02, 0x91), (27, 0x02, 0x91), (28, 0x03, 0x91),
        (25, 0x02, 0x94), (26, 0x02, 0x94), (27, 0x02, 0x94), (28, 0x03, 0x94),
        (25, 0x02, 0x9f), (26, 0x02, 0x9f), (27, 0x02, 0x9f), (28, 0x03, 0x9f),
    ],
    [
        (25, 0x02, 0xab), (26, 0x02, 0xab), (27, 0x02, 0xab), (28, 0x03, 0xab),
        (25, 0x02, 0xce), (26, 0x02, 0xce), (27, 0x02, 0xce), (28, 0x03, 0xce),
        (25, 0x02, 0xd7), (26, 0x02, 0xd7), (27, 0x02, 0xd7), (28, 0x03, 0xd7),
        (25, 0x02, 0xe1), (26, 0x02, 0xe1), (27, 0x02, 0xe1), (28, 0x03, 0xe1),
    ],
    [
        (25, 0x02, 0xec), (26, 0x02, 0xec), (27, 0x02, 0xec), (28, 0x03, 0xec),
        (25, 0x02, 0xed), (26, 0x02, 0xed), (27, 0x02, 0xed), (28, 0x03, 0xed),
        (29, 0x02, 0xc7), (30, 0x03, 0xc7), (29, 0x02, 0xcf), (30, 0x03, 0xcf),
        (29, 0x02, 0xea), (30, 0x03, 0xea), (29, 0x02, 0xeb), (30, 0x03, 0xeb),
    ],
    [
        (0, 0x03, 0xc0), (0, 0x03, 0xc1), (0, 0x03, 0xc8), (0, 0x03, 0xc9),
        (0, 0x03, 0xca), (0, 0x03, 0xcd), (0, 0x03, 0xd2), (0, 0x03, 0xd5),
        (0, 0x03, 0xda), (0, 0x03, 0xdb), (0, 0x03, 0xee), (0, 0x03, 0xf0),
        (0, 0x03, 0xf2), (0, 0x03, 0xf3), (0, 0x03, 0xff), (221, 0x00, 0x00),
    ],
    [
        (222, 0x00, 0x00), (223, 0x00, 0x00), (224, 0x00, 0x00), (225, 0x00, 0x00),
        (226, 0x00, 0x00), (227, 0x00, 0x00), (228, 0x00, 0x00), (229, 0x00, 0x00),
        (230, 0x00, 0x00), (231, 0x00, 0x00), (232, 0x00, 0x00), (233, 0x00, 0x00),
        (234, 0x00, 0x00), (235, 0x00, 0x00), (236, 0x00, 0x00), (237, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x81), (18, 0x02, 0x81), (19, 0x02, 0x81), (20, 0x02, 0x81),
        (21, 0x02, 0x81), (22, 0x02, 0x81), (23, 0x02, 0x81), (24, 0x03, 0x81),
        (17, 0x02, 0x84), (18, 0x02, 0x84), (19, 0x02, 0x84), (20, 0x02, 0x84),
        (21, 0x02, 0x84), (22, 0x02, 0x84), (23, 0x02, 0x84), (24, 0x03, 0x84),
    ],
    [
        (17, 0x02, 0x85), (18, 0x02, 0x85), (19, 0x02, 0x85), (20, 0x02, 0x85),
        (21, 0x02, 0x85), (22, 0x02, 0x85), (23, 0x02, 0x85), (24, 0x03, 0x85),
        (17, 0x02, 0x86), (18, 0x02, 0x86), (19, 0x02, 0x86), (20, 0x02, 0x86),
        (21, 0x02, 0x86), (22, 0x02, 0x86), (23, 0x02, 0x86), (24, 0x03, 0x86),
    ],
    [
        (17, 0x02, 0x88), (18, 0x02, 0x88), (19, 0x02, 0x88), (20, 0x02, 0x88),
        (21, 0x02, 0x88), (22, 0x02, 0x88), (23, 0x02, 0x88), (24, 0x03, 0x88),
        (17, 0x02, 0x92), (18, 0x02, 0x92), (19, 0x02, 0x92), (20, 0x02, 0x92),
        (21, 0x02, 0x92), (22, 0x02, 0x92), (23, 0x02, 0x92), (24, 0x03, 0x92),
    ],
    [
        (17, 0x02, 0x9a), (18, 0x02, 0x9a), (19, 0x02, 0x9a), (20, 0x02, 0x9a),
        (21, 0x02, 0x9a), (22, 0x02, 0x9a), (23, 0x02, 0x9a), (24, 0x03, 0x9a),
        (17, 0x02, 0x9c), (18, 0x02, 0x9c), (19, 0x02, 0x9c), (20, 0x02, 0x9c),
        (21, 0x02, 0x9c), (22, 0x02, 0x9c), (23, 0x02, 0x9c), (24, 0x03, 0x9c),
    ],
    [
        (17, 0x02, 0xa0), (18, 0x02, 0xa0), (19, 0x02, 0xa0), (20, 0x02, 0xa0),
        (21, 0x02, 0xa0), (22, 0x02, 0xa0), (23, 0x02, 0xa0), (24, 0x03, 0xa0),
        (17, 0x02, 0xa3), (18, 0x02, 0xa3), (19, 0x02, 0xa3), (20, 0x02, 0xa3),
        (21, 0x02, 0xa3), (22, 0x02, 0xa3), (23, 0x02, 0xa3), (24, 0x03, 0xa3),
    ],
    [
        (17, 0x02, 0xa4), (18, 0x02, 0xa4), (19, 0x02, 0xa4), (20, 0x02, 0xa4),
        (21, 0x02, 0xa4), (22, 0x02, 0xa4), (23, 0x02, 0xa4), (24, 0x03, 0xa4),
        (17, 0x02, 0xa9), (18, 0x02, 0xa9), (19, 0x02, 0xa9), (20, 0x02, 0xa9),
        (21, 0x02, 0xa9), (22, 0x02, 0xa9), (23, 0x02, 0xa9), (24, 0x03, 0xa9),
    ],
    [
        (17, 0x02, 0xaa), (18, 0x02, 0xaa), (19, 0x02, 0xaa), (20, 0x02, 0xaa),
        (21, 0x02, 0xaa), (22, 0x02, 0xaa), (23, 0x02, 0xaa), (24, 0x03, 0xaa),
        (17, 0x02, 0xad), (18, 0x02, 0xad), (19, 0x02, 0xad), (20, 0x02, 0xad),
        (21, 0x02, 0xad), (22, 0x02, 0xad), (23, 0x02, 0xad), (24, 0x03, 0xad),
    ],
    [
        (17, 0x02, 0xb2), (18, 0x02, 0xb2), (19, 0x02, 0xb2), (20, 0x02, 0xb2),
        (21, 0x02, 0xb2), (22, 0x02, 0xb2), (23, 0x02, 0xb2), (24, 0x03, 0xb2),
        (17, 0x02, 0xb5), (18, 0x02, 0xb5), (19, 0x02, 0xb5), (20, 0x02, 0xb5),
        (21, 0x02, 0xb5), (22, 0x02, 0xb5), (23, 0x02, 0xb5), (24, 0x03, 0xb5),
    ],
    [
        (17, 0x02, 0xb9), (18, 0x02, 0xb9), (19, 0x02, 0xb9), (20, 0x02, 0xb9),
        (21, 0x02, 0xb9), (22, 0x02, 0xb9), (23, 0x02, 0xb9), (24, 0x03, 0xb9),
        (17, 0x02, 0xba), (18, 0x02, 0xba), (19, 0x02, 0xba), (20, 0x02, 0xba),
        (21, 0x02, 0xba), (22, 0x02, 0xba), (23, 0x02, 0xba), (24, 0x03, 0xba),
    ],
    [
        (17, 0x02, 0xbb), (18, 0x02, 0xbb), (19, 0x02, 0xbb), (20, 0x02, 0xbb),
        (21, 0x02, 0xbb), (22, 0x02, 0xbb), (23, 0x02, 0xbb), (24, 0x03, 0xbb),
        (17, 0x02, 0xbd), (18, 0x02, 0xbd), (19, 0x02, 0xbd), (20, 0x02, 0xbd),
        (21, 0x02, 0xbd), (22, 0x02, 0xbd), (23, 0x02, 0xbd), (24, 0x03, 0xbd),
    ],
    [
        (17, 0x02, 0xbe), (18, 0x02, 0xbe), (19, 0x02, 0xbe), (20, 0x02, 0xbe),
        (21, 0x02, 0xbe), (22, 0x02, 0xbe), (23, 0x02, 0xbe), (24, 0x03, 0xbe),
        (17, 0x02, 0xc4), (18, 0x02, 0xc4), (19, 0x02, 0xc4), (20, 0x02, 0xc4),
        (21, 0x02, 0xc4), (22, 0x02, 0xc4), (23, 0x02, 0xc4), (24, 0x03, 0xc4),
    ],
    [
        (17, 0x02, 0xc6), (18, 0x02, 0xc6), (19, 0x02, 0xc6), (20, 0x02, 0xc6),
        (21, 0x02, 0xc6), (22, 0x02, 0xc6), (23, 0x02, 0xc6), (24, 0x03, 0xc6),
        (17, 0x02, 0xe4), (18, 0x02, 0xe4), (19, 0x02, 0xe4), (20, 0x02, 0xe4),
        (21, 0x02, 0xe4), (22, 0x02, 0xe4), (23, 0x02, 0xe4), (24, 0x03, 0xe4),
    ],
    [
        (17, 0x02, 0xe8), (18, 0x02, 0xe8), (19, 0x02, 0xe8), (20, 0x02, 0xe8),
        (21, 0x02, 0xe8), (22, 0x02, 0xe8), (23, 0x02, 0xe8), (24, 0x03, 0xe8),
        (17, 0x02, 0xe9), (18, 0x02, 0xe9), (19, 0x02, 0xe9), (20, 0x02, 0xe9),
        (21, 0x02, 0xe9), (22, 0x02, 0xe9), (23, 0x02, 0xe9), (24, 0x03, 0xe9),
    ],
    [
        (25, 0x02, 0x01), (26, 0x02, 0x01), (27, 0x02, 0x01), (28, 0x03, 0x01),
        (25, 0x02, 0x87), (26, 0x02, 0x87), (27, 0x02, 0x87), (28, 0x03, 0x87),
        (25, 0x02, 0x89), (26, 0x02, 0x89), (27, 0x02, 0x89), (28, 0x03, 0x89),
        (25, 0x02, 0x8a), (26, 0x02, 0x8a), (27, 0x02, 0x8a), (28, 0x03, 0x8a),
    ],
    [
        (25, 0x02, 0x8b), (26, 0x02, 0x8b), (27, 0x02, 0x8b), (28, 0x03, 0x8b),
        (25, 0x02, 0x8c), (26, 0x02, 0x8c), (27, 0x02, 0x8c), (28, 0x03, 0x8c),
        (25, 0x02, 0x8d), (26, 0x02, 0x8d), (27, 0x02, 0x8d), (28, 0x03, 0x8d),
        (25, 0x02, 0x8f), (26, 0x02, 0x8f), (27, 0x02, 0x8f), (28, 0x03, 0x8f),
    ],
    [
        (25, 0x02, 0x93), (26, 0x02, 0x93), (27, 0x02, 0x93), (28, 0x03, 0x93),
        (25, 0x02, 0x95), (26, 0x02, 0x95), (27, 0x02, 0x95), (28, 0x03, 0x95),
        (25, 0x02, 0x96), (26, 0x02, 0x96), (27, 0x02, 0x96), (28, 0x03, 0x96),
        (25, 0x02, 0x97), (26, 0x02, 0x97), (27, 0x02, 0x97), (28, 0x03, 0x97),
    ],
    [
        (25, 0x02, 0x98), (26, 0x02, 0x98), (27, 0x02, 0x98), (28, 0x03, 0x98),
        (25, 0x02, 0x9b), (26, 0x02, 0x9b), (27, 0x02, 0x9b), (28, 0x03, 0x9b),
        (25, 0x02, 0x9d), (26, 0x02, 0x9d), (27, 0x02, 0x9d), (28, 0x03, 0x9d),
        (25, 0x02, 0x9e), (26, 0x02, 0x9e), (27, 0x02, 0x9e), (28, 0x03, 0x9e),
    ],
    [
        (25, 0x02, 0xa5), (26, 0x02, 0xa5), (27, 0x02, 0xa5), (28, 0x03, 0xa5),
        (25, 0x02, 0xa6), (26, 0x02, 0xa6), (27, 0x02, 0xa6), (28, 0x03, 0xa6),
        (25, 0x02, 0xa8), (26, 0x02, 0xa8), (27, 0x02, 0xa8), (28, 0x03, 0xa8),
        (25, 0x02, 0xae), (26, 0x02, 0xae), (27, 0x02, 0xae), (28, 0x03, 0xae),
    ],
    [
        (25, 0x02, 0xaf), (26, 0x02, 0xaf), (27, 0x02, 0xaf), (28, 0x03, 0xaf),
        (25, 0x02, 0xb4), (26, 0x02, 0xb4), (27, 0x02, 0xb4), (28, 0x03, 0xb4),
        (25, 0x02, 0xb6), (26, 0x02, 0xb6), (27, 0x02, 0xb6), (28, 0x03, 0xb6),
        (25, 0x02, 0xb7), (26, 0x02, 0xb7), (27, 0x02, 0xb7), (28, 0x03, 0xb7),
    ],
    [
        (25, 0x02, 0xbc), (26, 0x02, 0xbc), (27, 0x02, 0xbc), (28, 0x03, 0xbc),
        (25, 0x02, 0xbf), (26, 0x02, 0xbf), (27, 0x02, 0xbf), (28, 0x03, 0xbf),
        (25, 0x02, 0xc5), (26, 0x02, 0xc5), (27, 0x02, 0xc5), (28, 0x03, 0xc5),
        (25, 0x02, 0xe7), (26, 0x02, 0xe7), (27, 0x02, 0xe7), (28, 0x03, 0xe7),
    ],
    [
        (25, 0x02, 0xef), (26, 0x02, 0xef), (27, 0x02, 0xef), (28, 0x03, 0xef),
        (29, 0x02, 0x09), (30, 0x03, 0x09), (29, 0x02, 0x8e), (30, 0x03, 0x8e),
        (29, 0x02, 0x90), (30, 0x03, 0x90), (29, 0x02, 0x91), (30, 0x03, 0x91),
        (29, 0x02, 0x94), (30, 0x03, 0x94), (29, 0x02, 0x9f), (30, 0x03, 0x9f),
    ],
    [
        (29, 0x02, 0xab), (30, 0x03, 0xab), (29, 0x02, 0xce), (30, 0x03, 0xce),
        (29, 0x02, 0xd7), (30, 0x03, 0xd7), (29, 0x02, 0xe1), (30, 0x03, 0xe1),
        (29, 0x02, 0xec), (30, 0x03, 0xec), (29, 0x02, 0xed), (30, 0x03, 0xed),
        (0, 0x03, 0xc7), (0, 0x03, 0xcf), (0, 0x03, 0xea), (0, 0x03, 0xeb),
    ],
    [
        (238, 0x00, 0x00), (239, 0x00, 0x00), (240, 0x00, 0x00), (241, 0x00, 0x00),
        (242, 0x00, 0x00), (243, 0x00, 0x00), (244, 0x00, 0x00), (245, 0x00, 0x00),
        (246, 0x00, 0x00), (247, 0x00, 0x00), (248, 0x00, 0x00), (249, 0x00, 0x00),
        (250, 0x00, 0x00), (251, 0x00, 0x00), (252, 0x00, 0x00), (253, 0x00, 0x00),
    ],
    [
        (25, 0x02, 0x0a), (26, 0x02, 0x0a), (27, 0x02, 0x0a), (28, 0x03, 0x0a),
        (25, 0x02, 0x0d), (26, 0x02, 0x0d), (27, 0x02, 0x0d), (28, 0x03, 0x0d),
        (25, 0x02, 0x16), (26, 0x02, 0x16), (27, 0x02, 0x16), (28, 0x03, 0x16),
        (0, 0x04, 0x00), (0, 0x04, 0x00), (0, 0x04, 0x00), (0, 0x04, 0x00),
    ],
    [
        (17, 0x02, 0x02), (18, 0x02, 0x02), (19, 0x02, 0x02), (20, 0x02, 0x02),
        (21, 0x02, 0x02), (22, 0x02, 0x02), (23, 0x02, 0x02), (24, 0x03, 0x02),
        (17, 0x02, 0x03), (18, 0x02, 0x03), (19, 0x02, 0x03), (20, 0x02, 0x03),
        (21, 0x02, 0x03), (22, 0x02, 0x03), (23, 0x02, 0x03), (24, 0x03, 0x03),
    ],
    [
        (17, 0x02, 0x04), (18, 0x02, 0x04), (19, 0x02, 0x04), (20, 0x02, 0x04),
        (21, 0x02, 0x04), (22, 0x02, 0x04), (23, 0x02, 0x04), (24, 0x03, 0x04),
        (17, 0x02, 0x05), (18, 0x02, 0x05), (19, 0x02, 0x05), (20, 0x02, 0x05),
        (21, 0x02, 0x05), (22, 0x02, 0x05), (23, 0x02, 0x05), (24, 0x03, 0x05),
    ],
    [
        (17, 0x02, 0x06), (18, 0x02, 0x06), (19, 0x02, 0x06), (20, 0x02, 0x06),
        (21, 0x02, 0x06), (22, 0x02, 0x06), (23, 0x02, 0x06), (24, 0x03, 0x06),
        (17, 0x02, 0x07), (18, 0x02, 0x07), (19, 0x02, 0x07), (20, 0x02, 0x07),
        (21, 0x02, 0x07), (22, 0x02, 0x07), (23, 0x02, 0x07), (24, 0x03, 0x07),
    ],
    [
        (17, 0x02, 0x08), (18, 0x02, 0x08), (19, 0x02, 0x08), (20, 0x02, 0x08),
        (21, 0x02, 0x08), (22, 0x02, 0x08), (23, 0x02, 0x08), (24, 0x03, 0x08),
        (17, 0x02, 0x0b), (18, 0x02, 0x0b), (19, 0x02, 0x0b), (20, 0x02, 0x0b),
        (21, 0x02, 0x0b), (22, 0x02, 0x0b), (23, 0x02, 0x0b), (24, 0x03, 0x0b),
    ],
    [
        (17, 0x02, 0x0c), (18, 0x02, 0x0c), (19, 0x02, 0x0c), (20, 0x02, 0x0c),
        (21, 0x02, 0x0c), (22, 0x02, 0x0c), (23, 0x02, 0x0c), (24, 0x03, 0x0c),
        (17, 0x02, 0x0e), (18, 0x02, 0x0e), (19, 0x02, 0x0e), (20, 0x02, 0x0e),
        (21, 0x02, 0x0e), (22, 0x02, 0x0e), (23, 0x02, 0x0e), (24, 0x03, 0x0e),
    ],
    [
        (17, 0x02, 0x0f), (18, 0x02, 0x0f), (19, 0x02, 0x0f), (20, 0x02, 0x0f),
        (21, 0x02, 0x0f), (22, 0x02, 0x0f), (23, 0x02, 0x0f), (24, 0x03, 0x0f),
        (17, 0x02, 0x10), (18, 0x02, 0x10), (19, 0x02, 0x10), (20, 0x02, 0x10),
        (21, 0x02, 0x10), (22, 0x02, 0x10), (23, 0x02, 0x10), (24, 0x03, 0x10),
    ],
    [
        (17, 0x02, 0x11), (18, 0x02, 0x11), (19, 0x02, 0x11), (20, 0x02, 0x11),
        (21, 0x02, 0x11), (22, 0x02, 0x11), (23, 0x02, 0x11), (24, 0x03, 0x11),
        (17, 0x02, 0x12), (18, 0x02, 0x12), (19, 0x02, 0x12), (20, 0x02, 0x12),
        (21, 0x02, 0x12), (22, 0x02, 0x12), (23, 0x02, 0x12), (24, 0x03, 0x12),
    ],
    [
        (17, 0x02, 0x13), (18, 0x02, 0x13), (19, 0x02, 0x13), (20, 0x02, 0x13),
        (21, 0x02, 0x13), (22, 0x02, 0x13), (23, 0x02, 0x13), (24, 0x03, 0x13),
        (17, 0x02, 0x14), (18, 0x02, 0x14), (19, 0x02, 0x14), (20, 0x02, 0x14),
        (21, 0x02, 0x14), (22, 0x02, 0x14), (23, 0x02, 0x14), (24, 0x03, 0x14),
    ],
    [
        (17, 0x02, 0x15), (18, 0x02, 0x15), (19, 0x02, 0x15), (20, 0x02, 0x15),
        (21, 0x02, 0x15), (22, 0x02, 0x15), (23, 0x02, 0x15), (24, 0x03, 0x15),
        (17, 0x02, 0x17), (18, 0x02, 0x17), (19, 0x02, 0x17), (20, 0x02, 0x17),
        (21, 0x02, 0x17), (22, 0x02, 0x17), (23, 0x02, 0x17), (24, 0x03, 0x17),
    ],
    [
        (17, 0x02, 0x18), (18, 0x02, 0x18), (19, 0x02, 0x18), (20, 0x02, 0x18),
        (21, 0x02, 0x18), (22, 0x02, 0x18), (23, 0x02, 0x18), (24, 0x03, 0x18),
        (17, 0x02, 0x19), (18, 0x02, 0x19), (19, 0x02, 0x19), (20, 0x02, 0x19),
        (21, 0x02, 0x19), (22, 0x02, 0x19), (23, 0x02, 0x19), (24, 0x03, 0x19),
    ],
    [
        (17, 0x02, 0x1a), (18, 0x02, 0x1a), (19, 0x02, 0x1a), (20, 0x02, 0x1a),
        (21, 0x02, 0x1a), (22, 0x02, 0x1a), (23, 0x02, 0x1a), (24, 0x03, 0x1a),
        (17, 0x02, 0x1b), (18, 0x02, 0x1b), (19, 0x02, 0x1b), (20, 0x02, 0x1b),
        (21, 0x02, 0x1b), (22, 0x02, 0x1b), (23, 0x02, 0x1b), (24, 0x03, 0x1b),
    ],
    [
        (17, 0x02, 0x1c), (18, 0x02, 0x1c), (19, 0x02, 0x1c), (20, 0x02, 0x1c),
        (21, 0x02, 0x1c), (22, 0x02, 0x1c), (23, 0x02, 0x1c), (24, 0x03, 0x1c),
        (17, 0x02, 0x1d), (18, 0x02, 0x1d), (19, 0x02, 0x1d), (20, 0x02, 0x1d),
        (21, 0x02, 0x1d), (22, 0x02, 0x1d), (23, 0x02, 0x1d), (24, 0x03, 0x1d),
    ],
    [
        (17, 0x02, 0x1e), (18, 0x02, 0x1e), (19, 0x02, 0x1e), (20, 0x02, 0x1e),
        (21, 0x02, 0x1e), (22, 0x02, 0x1e), (23, 0x02, 0x1e), (24, 0x03, 0x1e),
        (17, 0x02, 0x1f), (18, 0x02, 0x1f), (19, 0x02, 0x1f), (20, 0x02, 0x1f),
        (21, 0x02, 0x1f), (22, 0x02, 0x1f), (23, 0x02, 0x1f), (24, 0x03, 0x1f),
    ],
    [
        (17, 0x02, 0x7f), (18, 0x02, 0x7f), (19, 0x02, 0x7f), (20, 0x02, 0x7f),
        (21, 0x02, 0x7f), (22, 0x02, 0x7f), (23, 0x02, 0x7f), (24, 0x03, 0x7f),
        (17, 0x02, 0xdc), (18, 0x02, 0xdc), (19, 0x02, 0xdc), (20, 0x02, 0xdc),
        (21, 0x02, 0xdc), (22, 0x02, 0xdc), (23, 0x02, 0xdc), (24, 0x03, 0xdc),
    ],
    [
        (17, 0x02, 0xf9), (18, 0x02, 0xf9), (19, 0x02, 0xf9), (20, 0x02, 0xf9),
        (21, 0x02, 0xf9), (22, 0x02, 0xf9), (23, 0x02, 0xf9), (24, 0x03, 0xf9),
        (29, 0x02, 0x0a), (30, 0x03, 0x0a), (29, 0x02, 0x0d), (30, 0x03, 0x0d),
        (29, 0x02, 0x16), (30, 0x03, 0x16), (0, 0x04, 0x00), (0, 0x04, 0x00),
    ],
    [
        (17, 0x02, 0xcb), (18, 0x02, 0xcb), (19, 0x02, 0xcb), (20, 0x02, 0xcb),
        (21, 0x02, 0xcb), (22, 0x02, 0xcb), (23, 0x02, 0xcb), (24, 0x03, 0xcb),
        (17, 0x02, 0xcc), (18, 0x02, 0xcc), (19, 0x02, 0xcc), (20, 0x02, 0xcc),
        (21, 0x02, 0xcc), (22, 0x02, 0xcc), (23, 0x02, 0xcc), (24, 0x03, 0xcc),
    ],
    [
        (17, 0x02, 0xd3), (18, 0x02, 0xd3), (19, 0x02, 0xd3), (20, 0x02, 0xd3),
        (21, 0x02, 0xd3), (22, 0x02, 0xd3), (23, 0x02, 0xd3), (24, 0x03, 0xd3),
        (17, 0x02, 0xd4), (18, 0x02, 0xd4), (19, 0x02, 0xd4), (20, 0x02, 0xd4),
        (21, 0x02, 0xd4), (22, 0x02, 0xd4), (23, 0x02, 0xd4), (24, 0x03, 0xd4),
    ],
    [
        (17, 0x02, 0xd6), (18, 0x02, 0xd6), (19, 0x02, 0xd6), (20, 0x02, 0xd6),
        (21, 0x02, 0xd6), (22, 0x02, 0xd6), (23, 0x02, 0xd6), (24, 0x03, 0xd6),
        (17, 0x02, 0xdd), (18, 0x02, 0xdd), (19, 0x02, 0xdd), (20, 0x02, 0xdd),
        (21, 0x02, 0xdd), (22, 0x02, 0xdd), (23, 0x02, 0xdd), (24, 0x03, 0xdd),
    ],
    [
        (17, 0x02, 0xde), (18, 0x02, 0xde), (19, 0x02, 0xde), (20, 0x02, 0xde),
        (21, 0x02, 0xde), (22, 0x02, 0xde), (23, 0x02, 0xde), (24, 0x03, 0xde),
        (17, 0x02, 0xdf), (18, 0x02, 0xdf), (19, 0x02, 0xdf), (20, 0x02, 0xdf),
        (21, 0x02, 0xdf), (22, 0x02, 0xdf), (23, 0x02, 0xdf), (24, 0x03, 0xdf),
    ],
    [
        (17, 0x02, 0xf1), (18, 0x02, 0xf1), (19, 0x02, 0xf1), (20, 0x02, 0xf1),
        (21, 0x02, 0xf1), (22, 0x02, 0xf1), (23, 0x02, 0xf1), (24, 0x03, 0xf1),
        (17, 0x02, 0xf4), (18, 0x02, 0xf4), (19, 0x02, 0xf4), (20, 0x02, 0xf4),
        (21, 0x02, 0xf4), (22, 0x02, 0xf4), (23, 0x02, 0xf4), (24, 0x03, 0xf4),
    ],
    [
        (17, 0x02, 0xf5), (18, 0x02, 0xf5), (19, 0x02, 0xf5), (20, 0x02, 0xf5),
        (21, 0x02, 0xf5), (22, 0x02, 0xf5), (23, 0x02, 0xf5), (24, 0x03, 0xf5),
        (17, 0x02, 0xf6), (18, 0x02, 0xf6), (19, 0x02, 0xf6), (20, 0x02, 0xf6),
        (21, 0x02, 0xf6), (22, 0x02, 0xf6), (23, 0x02, 0xf6), (24, 0x03, 0xf6),
    ],
    [
        (17, 0x02, 0xf7), (18, 0x02, 0xf7), (19, 0x02, 0xf7), (20, 0x02, 0xf7),
        (21, 0x02, 0xf7), (22, 0x02, 0xf7), (23, 0x02, 0xf7), (24, 0x03, 0xf7),
        (17, 0x02, 0xf8), (18, 0x02, 0xf8), (19, 0x02, 0xf8), (20, 0x02, 0xf8),
        (21, 0x02, 0xf8), (22, 0x02, 0xf8), (23, 0x02, 0xf8), (24, 0x03, 0xf8),
    ],
    [
        (17, 0x02, 0xfa), (18, 0x02, 0xfa), (19, 0x02, 0xfa), (20, 0x02, 0xfa),
        (21, 0x02, 0xfa), (22, 0x02, 0xfa), (23, 0x02, 0xfa), (24, 0x03, 0xfa),
        (17, 0x02, 0xfb), (18, 0x02, 0xfb), (19, 0x02, 0xfb), (20, 0x02, 0xfb),
        (21, 0x02, 0xfb), (22, 0x02, 0xfb), (23, 0x02, 0xfb), (24, 0x03, 0xfb),
    ],
    [
        (17, 0x02, 0xfc), (18, 0x02, 0xfc), (19, 0x02, 0xfc), (20, 0x02, 0xfc),
        (21, 0x02, 0xfc), (22, 0x02, 0xfc), (23, 0x02, 0xfc), (24, 0x03, 0xfc),
        (17, 0x02, 0xfd), (18, 0x02, 0xfd), (19, 0x02, 0xfd), (20, 0x02, 0xfd),
        (21, 0x02, 0xfd), (22, 0x02, 0xfd), (23, 0x02, 0xfd), (24, 0x03, 0xfd),
    ],
    [
        (17, 0x02, 0xfe), (18, 0x02, 0xfe), (19, 0x02, 0xfe), (20, 0x02, 0xfe),
        (21, 0x02, 0xfe), (22, 0x02, 0xfe), (23, 0x02, 0xfe), (24, 0x03, 0xfe),
        (25, 0x02, 0x02), (26, 0x02, 0x02), (27, 0x02, 0x02), (28, 0x03, 0x02),
        (25, 0x02, 0x03), (26, 0x02, 0x03), (27, 0x02, 0x03), (28, 0x03, 0x03),
    ],
    [
        (25, 0x02, 0x04), (26, 0x02, 0x04), (27, 0x02, 0x04), (28, 0x03, 0x04),
        (25, 0x02, 0x05), (26, 0x02, 0x05), (27, 0x02, 0x05), (28, 0x03, 0x05),
        (25, 0x02, 0x06), (26, 0x02, 0x06), (27, 0x02, 0x06), (28, 0x03, 0x06),
        (25, 0x02, 0x07), (26, 0x02, 0x07), (27, 0x02, 0x07), (28, 0x03, 0x07),
    ],
    [
        (25, 0x02, 0x08), (26, 0x02, 0x08), (27, 0x02, 0x08), (28, 0x03, 0x08),
        (25, 0x02, 0x0b), (26, 0x02, 0x0b), (27, 0x02, 0x0b), (28, 0x03, 0x0b),
        (25, 0x02, 0x0c), (26, 0x02, 0x0c), (27, 0x02, 0x0c), (28, 0x03, 0x0c),
        (25, 0x02, 0x0e), (26, 0x02, 0x0e), (27, 0x02, 0x0e), (28, 0x03, 0x0e),
    ],
    [
        (25, 0x02, 0x0f), (26, 0x02, 0x0f), (27, 0x02, 0x0f), (28, 0x03, 0x0f),
        (25, 0x02, 0x10), (26, 0x02, 0x10), (27, 0x02, 0x10), (28, 0x03, 0x10),
        (25, 0x02, 0x11), (26, 0x02, 0x11), (27, 0x02, 0x11), (28, 0x03, 0x11),
        (25, 0x02, 0x12), (26, 0x02, 0x12), (27, 0x02, 0x12), (28, 0x03, 0x12),
    ],
    [
        (25, 0x02, 0x13), (26, 0x02, 0x13), (27, 0x02, 0x13), (28, 0x03, 0x13),
        (25, 0x02, 0x14), (26, 0x02, 0x14), (27, 0x02, 0x14), (28, 0x03, 0x14),
        (25, 0x02, 0x15), (26, 0x02, 0x15), (27, 0x02, 0x15), (28, 0x03, 0x15),
        (25, 0x02, 0x17), (26, 0x02, 0x17), (27, 0x02, 0x17), (28, 0x03, 0x17),
    ],
    [
        (25, 0x02, 0x18), (26, 0x02, 0x18), (27, 0x02, 0x18), (28, 0x03, 0x18),
        (25, 0x02, 0x19), (26, 0x02, 0x19), (27, 0x02, 0x19), (28, 0x03, 0x19),
        (25, 0x02, 0x1a), (26, 0x02, 0x1a), (27, 0x02, 0x1a), (28, 0x03, 0x1a),
        (25, 0x02, 0x1b), (26, 0x02, 0x1b), (27, 0x02, 0x1b), (28, 0x03, 0x1b),
    ],
    [
        (25, 0x02, 0x1c), (26, 0x02, 0x1c), (27, 0x02, 0x1c), (28, 0x03, 0x1c),
        (25, 0x02, 0x1d), (26, 0x02, 0x1d), (27, 0x02, 0x1d), (28, 0x03, 0x1d),
        (25, 0x02, 0x1e), (26, 0x02, 0x1e), (27, 0x02, 0x1e), (28, 0x03, 0x1e),
        (25, 0x02, 0x1f), (26, 0x02, 0x1f), (27, 0x02, 0x1f), (28, 0x03, 0x1f),
    ],
    [
        (25, 0x02, 0x7f), (26, 0x02, 0x7f), (27, 0x02, 0x7f), (28, 0x03, 0x7f),
        (25, 0x02, 0xdc), (26, 0x02, 0xdc), (27, 0x02, 0xdc), (28, 0x03, 0xdc),
        (25, 0x02, 0xf9), (26, 0x02, 0xf9), (27, 0x02, 0xf9), (28, 0x03, 0xf9),
        (0, 0x03, 0x0a), (0, 0x03, 0x0d), (0, 0x03, 0x16), (0, 0x04, 0x00),
    ],
    [
        (17, 0x02, 0xc0), (18, 0x02, 0xc0), (19, 0x02, 0xc0), (20, 0x02, 0xc0),
        (21, 0x02, 0xc0), (22, 0x02, 0xc0), (23, 0x02, 0xc0), (24, 0x03, 0xc0),
        (17, 0x02, 0xc1), (18, 0x02, 0xc1), (19, 0x02, 0xc1), (20, 0x02, 0xc1),
        (21, 0x02, 0xc1), (22, 0x02, 0xc1), (23, 0x02, 0xc1), (24, 0x03, 0xc1),
    ],
    [
        (17, 0x02, 0xc8), (18, 0x02, 0xc8), (19, 0x02, 0xc8), (20, 0x02, 0xc8),
        (21, 0x02, 0xc8), (22, 0x02, 0xc8), (23, 0x02, 0xc8), (24, 0x03, 0xc8),
        (17, 0x02, 0xc9), (18, 0x02, 0xc9), (19, 0x02, 0xc9), (20, 0x02, 0xc9),
        (21, 0x02, 0xc9), (22, 0x02, 0xc9), (23, 0x02, 0xc9), (24, 0x03, 0xc9),
    ],
    [
        (17, 0x02, 0xca), (18, 0x02, 0xca), (19, 0x02, 0xca), (20, 0x02, 0xca),
        (21, 0x02, 0xca), (22, 0x02, 0xca), (23, 0x02, 0xca), (24, 0x03, 0xca),
        (17, 0x02, 0xcd), (18, 0x02, 0xcd), (19, 0x02, 0xcd), (20, 0x02, 0xcd),
        (21, 0x02, 0xcd), (22, 0x02, 0xcd), (23, 0x02, 0xcd), (24, 0x03, 0xcd),
    ],
    [
        (17, 0x02, 0xd2), (18, 0x02, 0xd2), (19, 0x02, 0xd2), (20, 0x02, 0xd2),
        (21, 0x02, 0xd2), (22, 0x02, 0xd2), (23, 0x02, 0xd2), (24, 0x03, 0xd2),
        (17, 0x02, 0xd5), (18, 0x02, 0xd5), (19, 0x02, 0xd5), (20, 0x02, 0xd5),
        (21, 0x02, 0xd5), (22, 0x02, 0xd5), (23, 0x02, 0xd5), (24, 0x03, 0xd5),
    ],
    [
        (17, 0x02, 0xda), (18, 0x02, 0xda), (19, 0x02, 0xda), (20, 0x02, 0xda),
        (21, 0x02, 0xda), (22, 0x02, 0xda), (23, 0x02, 0xda), (24, 0x03, 0xda),
        (17, 0x02, 0xdb), (18, 0x02, 0xdb), (19, 0x02, 0xdb), (20, 0x02, 0xdb),
        (21, 0x02, 0xdb), (22, 0x02, 0xdb), (23, 0x02, 0xdb), (24, 0x03, 0xdb),
    ],
    [
        (17, 0x02, 0xee), (18, 0x02, 0xee), (19, 0x02, 0xee), (20, 0x02, 0xee),
        (21, 0x02, 0xee), (22, 0x02, 0xee), (23, 0x02, 0xee), (24, 0x03, 0xee),
        (17, 0x02, 0xf0), (18, 0x02, 0xf0), (19, 0x02, 0xf0), (20, 0x02, 0xf0),
        (21, 0x02, 0xf0), (22, 0x02, 0xf0), (23, 0x02, 0xf0), (24, 0x03, 0xf0),
    ],
    [
        (17, 0x02, 0xf2), (18, 0x02, 0xf2), (19, 0x02, 0xf2), (20, 0x02, 0xf2),
        (21, 0x02, 0xf2), (22, 0x02, 0xf2), (23, 0x02, 0xf2), (24, 0x03, 0xf2),
        (17, 0x02, 0xf3), (18, 0x02, 0xf3), (19, 0x02, 0xf3), (20, 0x02, 0xf3),
        (21, 0x02, 0xf3), (22, 0x02, 0xf3), (23, 0x02, 0xf3), (24, 0x03, 0xf3),
    ],
    [
        (17, 0x02, 0xff), (18, 0x02, 0xff), (19, 0x02, 0xff), (20, 0x02, 0xff),
        (21, 0x02, 0xff), (22, 0x02, 0xff), (23, 0x02, 0xff), (24, 0x03, 0xff),
        (25, 0x02, 0xcb), (26, 0x02, 0xcb), (27, 0x02, 0xcb), (28, 0x03, 0xcb),
        (25, 0x02, 0xcc), (26, 0x02, 0xcc), (27, 0x02, 0xcc), (28, 0x03, 0xcc),
    ],
    [
        (25, 0x02, 0xd3), (26, 0x02, 0xd3), (27, 0x02, 0xd3), (28, 0x03, 0xd3),
        (25, 0x02, 0xd4), (26, 0x02, 0xd4), (27, 0x02, 0xd4), (28, 0x03, 0xd4),
        (25, 0x02, 0xd6), (26, 0x02, 0xd6), (27, 0x02, 0xd6), (28, 0x03, 0xd6),
        (25, 0x02, 0xdd), (26, 0x02, 0xdd), (27, 0x02, 0xdd), (28, 0x03, 0xdd),
    ],
    [
        (25, 0x02, 0xde), (26, 0x02, 0xde), (27, 0x02, 0xde), (28, 0x03, 0xde),
        (25, 0x02, 0xdf), (26, 0x02, 0xdf), (27, 0x02, 0xdf), (28, 0x03, 0xdf),
        (25, 0x02, 0xf1), (26, 0x02, 0xf1), (27, 0x02, 0xf1), (28, 0x03, 0xf1),
        (25, 0x02, 0xf4), (26, 0x02, 0xf4), (27, 0x02, 0xf4), (28, 0x03, 0xf4),
    ],
    [
        (25, 0x02, 0xf5), (26, 0x02, 0xf5), (27, 0x02, 0xf5), (28, 0x03, 0xf5),
        (25, 0x02, 0xf6), (26, 0x02, 0xf6), (27, 0x02, 0xf6), (28, 0x03, 0xf6),
        (25, 0x02, 0xf7), (26, 0x02, 0xf7), (27, 0x02, 0xf7), (28, 0x03, 0xf7),
        (25, 0x02, 0xf8), (26, 0x02, 0xf8), (27, 0x02, 0xf8), (28, 0x03, 0xf8),
    ],
    [
        (25, 0x02, 0xfa), (26, 0x02, 0xfa), (27, 0x02, 0xfa), (28, 0x03, 0xfa),
        (25, 0x02, 0xfb), (26, 0x02, 0xfb), (27, 0x02, 0xfb), (28, 0x03, 0xfb),
        (25, 0x02, 0xfc), (26, 0x02, 0xfc), (27, 0x02, 0xfc), (28, 0x03, 0xfc),
        (25, 0x02, 0xfd), (26, 0x02, 0xfd), (27, 0x02, 0xfd), (28, 0x03, 0xfd),
    ],
    [
        (25, 0x02, 0xfe), (26, 0x02, 0xfe), (27, 0x02, 0xfe), (28, 0x03, 0xfe),
        (29, 0x02, 0x02), (30, 0x03, 0x02), (29, 0x02, 0x03), (30, 0x03, 0x03),
        (29, 0x02, 0x04), (30, 0x03, 0x04), (29, 0x02, 0x05), (30, 0x03, 0x05),
        (29, 0x02, 0x06), (30, 0x03, 0x06), (29, 0x02, 0x07), (30, 0x03, 0x07),
    ],
    [
        (29, 0x02, 0x08), (30, 0x03, 0x08), (29, 0x02, 0x0b), (30, 0x03, 0x0b),
        (29, 0x02, 0x0c), (30, 0x03, 0x0c), (29, 0x02, 0x0e), (30, 0x03, 0x0e),
        (29, 0x02, 0x0f), (30, 0x03, 0x0f), (29, 0x02, 0x10), (30, 0x03, 0x10),
        (29, 0x02, 0x11), (30, 0x03, 0x11), (29, 0x02, 0x12), (30, 0x03, 0x12),
    ],
    [
        (29, 0x02, 0x13), (30, 0x03, 0x13), (29, 0x02, 0x14), (30, 0x03, 0x14),
        (29, 0x02, 0x15), (30, 0x03, 0x15), (29, 0x02, 0x17), (30, 0x03, 0x17),
        (29, 0x02, 0x18), (30, 0x03, 0x18), (29, 0x02, 0x19), (30, 0x03, 0x19),
        (29, 0x02, 0x1a), (30, 0x03, 0x1a), (29, 0x02, 0x1b), (30, 0x03, 0x1b),
    ],
    [
        (29, 0x02, 0x1c), (30, 0x03, 0x1c), (29, 0x02, 0x1d), (30, 0x03, 0x1d),
        (29, 0x02, 0x1e), (30, 0x03, 0x1e), (29, 0x02, 0x1f), (30, 0x03, 0x1f),
        (29, 0x02, 0x7f), (30, 0x03, 0x7f), (29, 0x02, 0xdc), (30, 0x03, 0xdc),
        (29, 0x02, 0xf9), (30, 0x03, 0xf9), (254, 0x00, 0x00), (255, 0x00, 0x00),
    ],
    [
        (17, 0x02, 0x0a), (18, 0x02, 0x0a), (19, 0x02, 0x0a), (20, 0x02, 0x0a),
        (21, 0x02, 0x0a), (22, 0x02, 0x0a), (23, 0x02, 0x0a), (24, 0x03, 0x0a),
        (17, 0x02, 0x0d), (18, 0x02, 0x0d), (19, 0x02, 0x0d), (20, 0x02, 0x0d),
        (21, 0x02, 0x0d), (22, 0x02, 0x0d), (23, 0x02, 0x0d), (24, 0x03, 0x0d),
    ],
    [
        (17, 0x02, 0x16), (18, 0x02, 0x16), (19, 0x02, 0x16), (20, 0x02, 0x16),
        (21, 0x02, 0x16), (22, 0x02, 0x16), (23, 0x02, 0x16), (24, 0x03, 0x16),
        (0, 0x04, 0x00), (0, 0x04, 0x00), (0, 0x04, 0x00), (0, 0x04, 0x00),
        (0, 0x04, 0x00), (0, 0x04, 0x00), (0, 0x04, 0x00), (0, 0x04, 0x00),
    ],
];

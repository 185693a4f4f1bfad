/// Elapsed time per request, in milliseconds, for the recorded batch of API calls.
pub const RESPONSE_TIMES_MS: [u64; 50] = [
    2, 2, 2, 2, 2, 3, 3, 3, 2, 3, 3, 8, 2, 2, 2, 2, 2, 2, 3, 6, 12, 7, 24, 24, 9, 28, 4, 14, 11, 4,
    61, 3, 6, 13, 9, 15, 8, 17, 11, 6, 10, 5, 3, 3, 4, 2, 2, 2, 10, 3,
];

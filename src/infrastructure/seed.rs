// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::song::{Song, SongDraft, GENRES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TITLES: [&str; 20] = [
    "Bohemian Rhapsody",
    "Stairway to Heaven",
    "Hotel California",
    "Imagine",
    "Sweet Child O' Mine",
    "Billie Jean",
    "Like a Rolling Stone",
    "Smells Like Teen Spirit",
    "Purple Haze",
    "Good Vibrations",
    "Respect",
    "Hey Jude",
    "What's Going On",
    "Superstition",
    "Born to Run",
    "Thunder Road",
    "The Sound of Silence",
    "Bridge Over Troubled Water",
    "Yesterday",
    "Let It Be",
];

const ARTISTS: [&str; 18] = [
    "Queen",
    "Led Zeppelin",
    "Eagles",
    "John Lennon",
    "Guns N' Roses",
    "Michael Jackson",
    "Bob Dylan",
    "Nirvana",
    "Jimi Hendrix",
    "The Beach Boys",
    "Aretha Franklin",
    "The Beatles",
    "Marvin Gaye",
    "Stevie Wonder",
    "Bruce Springsteen",
    "Simon & Garfunkel",
    "Pink Floyd",
    "The Rolling Stones",
];

const ALBUMS: [&str; 15] = [
    "A Night at the Opera",
    "Led Zeppelin IV",
    "Hotel California",
    "Imagine",
    "Appetite for Destruction",
    "Thriller",
    "Highway 61 Revisited",
    "Nevermind",
    "Are You Experienced",
    "Pet Sounds",
    "I Never Loved a Man the Way I Love You",
    "Abbey Road",
    "What's Going On",
    "Songs in the Key of Life",
    "Born to Run",
];

/// 生成演示曲库
///
/// 标题、艺术家、专辑按序循环取值，年份（1960-2022）、时长（120-299秒）
/// 与流派由随机数决定。相同的 `seed` 总是生成相同的字段值。
///
/// # 参数
///
/// * `count` - 生成的歌曲数量
/// * `seed` - 随机数种子
///
/// # 返回值
///
/// 返回按生成顺序排列的歌曲列表
pub fn demo_catalog(count: usize, seed: u64) -> Vec<Song> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            Song::new(SongDraft {
                title: TITLES[i % TITLES.len()].to_string(),
                artist: ARTISTS[i % ARTISTS.len()].to_string(),
                album: ALBUMS[i % ALBUMS.len()].to_string(),
                year: rng.random_range(1960..2023),
                duration: rng.random_range(120..300),
                genre: GENRES[rng.random_range(0..GENRES.len())].to_string(),
            })
        })
        .collect()
}

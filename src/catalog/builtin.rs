//! Built-in sample catalog: 28 titles with their curated buckets

use crate::models::{Dimension, Medium, Runtime, Title, TitleId};

use super::CategoryIndex;

struct Seed {
    id: &'static str,
    name: &'static str,
    medium: Medium,
    platforms: &'static [&'static str],
    rating: f32,
    mood_affinity: u8,
    synopsis: &'static str,
    trailer_url: &'static str,
    language: &'static str,
    subtitles: &'static [&'static str],
    dubbing: &'static [&'static str],
    poster_url: &'static str,
    year: u16,
    genres: &'static [&'static str],
    runtime: &'static str,
    rationale: &'static str,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl From<&Seed> for Title {
    fn from(seed: &Seed) -> Self {
        Title {
            id: TitleId::new(seed.id),
            name: seed.name.to_string(),
            medium: seed.medium,
            platforms: strings(seed.platforms),
            rating: seed.rating,
            mood_affinity: seed.mood_affinity,
            synopsis: seed.synopsis.to_string(),
            trailer_url: seed.trailer_url.to_string(),
            language: seed.language.to_string(),
            subtitles: strings(seed.subtitles),
            dubbing: strings(seed.dubbing),
            poster_url: seed.poster_url.to_string(),
            year: seed.year,
            genres: strings(seed.genres),
            runtime: Runtime::parse(seed.runtime),
            rationale: seed.rationale.to_string(),
        }
    }
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        name: "Kantara",
        medium: Medium::Film,
        platforms: &["Prime Video", "Hotstar"],
        rating: 8.2,
        mood_affinity: 96,
        synopsis: "A mystical Kannada thriller that blends folklore with stunning visuals, perfect for an inspiring and mind-blowing experience.",
        trailer_url: "https://www.youtube.com/watch?v=8mrVmf239GU",
        language: "Kannada",
        subtitles: &["English", "Hindi", "Tamil", "Telugu"],
        dubbing: &["Hindi", "Tamil", "Telugu"],
        poster_url: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2022,
        genres: &["Action", "Drama", "Thriller"],
        runtime: "148 min",
        rationale: "You want to feel inspired and mind-blown: this Kannada masterpiece combines stunning cinematography with deep cultural storytelling that will leave you amazed.",
    },
    Seed {
        id: "2",
        name: "RRR",
        medium: Medium::Film,
        platforms: &["Netflix", "Prime Video"],
        rating: 7.9,
        mood_affinity: 94,
        synopsis: "An epic Telugu action drama about friendship and revolution, featuring spectacular action sequences and emotional depth.",
        trailer_url: "https://www.youtube.com/watch?v=f_vbAtFSEc0",
        language: "Telugu",
        subtitles: &["English", "Hindi", "Tamil", "Kannada"],
        dubbing: &["Hindi", "Tamil", "Malayalam"],
        poster_url: "https://images.pexels.com/photos/1117132/pexels-photo-1117132.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2022,
        genres: &["Action", "Drama", "History"],
        runtime: "187 min",
        rationale: "You're feeling happy and want entertainment: this Telugu blockbuster delivers incredible action, emotion, and visual spectacle perfect for an uplifting experience.",
    },
    Seed {
        id: "3",
        name: "The Good Place",
        medium: Medium::Series,
        platforms: &["Netflix", "Prime Video"],
        rating: 8.2,
        mood_affinity: 92,
        synopsis: "A comedy about the afterlife that's both hilarious and deeply philosophical, perfect for lifting spirits.",
        trailer_url: "https://www.youtube.com/watch?v=RfBgT5djaQw",
        language: "English",
        subtitles: &["Hindi", "Tamil", "Telugu", "Spanish", "French"],
        dubbing: &["Hindi", "Spanish"],
        poster_url: "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2016,
        genres: &["Comedy", "Fantasy", "Drama"],
        runtime: "22 min episodes",
        rationale: "You're feeling happy and want to stay uplifted: this series combines humor with heartwarming moments that will keep your spirits high.",
    },
    Seed {
        id: "4",
        name: "Zindagi Na Milegi Dobara",
        medium: Medium::Film,
        platforms: &["Netflix", "Prime Video"],
        rating: 8.2,
        mood_affinity: 95,
        synopsis: "Three friends on a Spanish adventure discover themselves and the meaning of friendship.",
        trailer_url: "https://www.youtube.com/watch?v=tlMPtbK6uDM",
        language: "Hindi",
        subtitles: &["English", "Tamil", "Telugu", "Kannada"],
        dubbing: &["English", "Tamil"],
        poster_url: "https://images.pexels.com/photos/1117132/pexels-photo-1117132.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2011,
        genres: &["Adventure", "Comedy", "Drama"],
        runtime: "155 min",
        rationale: "You're feeling stressed and need an escape: this adventure comedy will transport you to beautiful Spain and remind you to live life to the fullest.",
    },
    Seed {
        id: "5",
        name: "The Pursuit of Happyness",
        medium: Medium::Film,
        platforms: &["Netflix", "Prime Video"],
        rating: 8.0,
        mood_affinity: 93,
        synopsis: "An inspiring true story about a father's struggle to build a better life for his son against all odds.",
        trailer_url: "https://www.youtube.com/watch?v=89Kq8SDyvfg",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German"],
        dubbing: &["Hindi", "Spanish"],
        poster_url: "https://images.pexels.com/photos/1117132/pexels-photo-1117132.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2006,
        genres: &["Drama", "Biography"],
        runtime: "117 min",
        rationale: "You're feeling stressed and need inspiration: this powerful story of perseverance will remind you that challenges can be overcome with determination.",
    },
    Seed {
        id: "6",
        name: "Headspace Guide to Meditation",
        medium: Medium::Series,
        platforms: &["Netflix"],
        rating: 7.8,
        mood_affinity: 91,
        synopsis: "A calming animated series that teaches meditation techniques to reduce stress and anxiety.",
        trailer_url: "https://www.youtube.com/watch?v=example",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German"],
        dubbing: &["Hindi", "Spanish"],
        poster_url: "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2021,
        genres: &["Documentary", "Animation", "Wellness"],
        runtime: "20 min episodes",
        rationale: "You're feeling stressed and need to relax: this mindfulness series will teach you practical techniques to manage stress and find inner peace.",
    },
    Seed {
        id: "7",
        name: "Midnight Diner: Tokyo Stories",
        medium: Medium::Series,
        platforms: &["Netflix"],
        rating: 8.5,
        mood_affinity: 94,
        synopsis: "A gentle Japanese series about a late-night diner where customers share their stories over comfort food.",
        trailer_url: "https://www.youtube.com/watch?v=example",
        language: "Japanese",
        subtitles: &["English", "Hindi", "Spanish", "French"],
        dubbing: &["English"],
        poster_url: "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2016,
        genres: &["Drama", "Slice of Life"],
        runtime: "30 min episodes",
        rationale: "You're feeling tired and need something soothing: this gentle series offers comfort food for the soul with its warm, slow-paced storytelling.",
    },
    Seed {
        id: "8",
        name: "Our Planet",
        medium: Medium::Series,
        platforms: &["Netflix"],
        rating: 9.3,
        mood_affinity: 92,
        synopsis: "Breathtaking nature documentary showcasing Earth's most spectacular wildlife and landscapes.",
        trailer_url: "https://www.youtube.com/watch?v=example",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Hindi", "Spanish", "French"],
        poster_url: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2019,
        genres: &["Documentary", "Nature"],
        runtime: "50 min episodes",
        rationale: "You're feeling tired and want to unwind: these stunning nature visuals and David Attenborough's soothing narration will help you relax completely.",
    },
    Seed {
        id: "9",
        name: "Chef's Table",
        medium: Medium::Series,
        platforms: &["Netflix"],
        rating: 8.5,
        mood_affinity: 90,
        synopsis: "Visually stunning documentary series featuring world-renowned chefs and their culinary artistry.",
        trailer_url: "https://www.youtube.com/watch?v=example",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Spanish", "French"],
        poster_url: "https://images.pexels.com/photos/1117132/pexels-photo-1117132.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2015,
        genres: &["Documentary", "Food"],
        runtime: "50 min episodes",
        rationale: "You're feeling tired and want something visually relaxing: this beautifully shot food documentary will soothe your senses with gorgeous culinary artistry.",
    },
    Seed {
        id: "10",
        name: "The Office",
        medium: Medium::Series,
        platforms: &["Netflix", "Prime Video"],
        rating: 8.5,
        mood_affinity: 96,
        synopsis: "A mockumentary sitcom about office life that's both hilarious and surprisingly heartwarming.",
        trailer_url: "https://www.youtube.com/watch?v=LHOtME2DL4g",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German"],
        dubbing: &["Hindi", "Spanish"],
        poster_url: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2005,
        genres: &["Comedy", "Romance", "Drama"],
        runtime: "22 min episodes",
        rationale: "You're feeling anxious and need comfort: this beloved comedy series offers familiar characters and gentle humor that will ease your worries.",
    },
    Seed {
        id: "11",
        name: "Breathe: Into the Shadows",
        medium: Medium::Series,
        platforms: &["Prime Video"],
        rating: 7.3,
        mood_affinity: 88,
        synopsis: "A psychological thriller that explores the depths of human psychology and family bonds.",
        trailer_url: "https://www.youtube.com/watch?v=example",
        language: "Hindi",
        subtitles: &["English", "Tamil", "Telugu", "Kannada"],
        dubbing: &["English", "Tamil"],
        poster_url: "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2020,
        genres: &["Thriller", "Drama", "Crime"],
        runtime: "45 min episodes",
        rationale: "You're feeling anxious but want engagement: this gripping thriller will redirect your nervous energy into compelling storytelling.",
    },
    Seed {
        id: "12",
        name: "Inside Out",
        medium: Medium::Film,
        platforms: &["Disney+", "Prime Video"],
        rating: 8.1,
        mood_affinity: 94,
        synopsis: "A Pixar masterpiece that explores emotions inside a young girl's mind with humor and heart.",
        trailer_url: "https://www.youtube.com/watch?v=example",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Hindi", "Spanish", "French"],
        poster_url: "https://images.pexels.com/photos/1117132/pexels-photo-1117132.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2015,
        genres: &["Animation", "Family", "Comedy"],
        runtime: "95 min",
        rationale: "You're feeling anxious and need emotional understanding: this beautiful film helps you process feelings and reminds you that all emotions are valid.",
    },
    Seed {
        id: "13",
        name: "Her",
        medium: Medium::Film,
        platforms: &["Netflix", "Prime Video"],
        rating: 8.0,
        mood_affinity: 93,
        synopsis: "A thoughtful sci-fi romance about connection and loneliness in the digital age.",
        trailer_url: "https://www.youtube.com/watch?v=example",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German"],
        dubbing: &["Hindi", "Spanish"],
        poster_url: "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2013,
        genres: &["Romance", "Drama", "Sci-Fi"],
        runtime: "126 min",
        rationale: "You're feeling lonely and need connection: this beautiful film explores human relationships and reminds you that meaningful connections are possible.",
    },
    Seed {
        id: "14",
        name: "Little Women",
        medium: Medium::Film,
        platforms: &["Netflix", "Prime Video"],
        rating: 7.8,
        mood_affinity: 91,
        synopsis: "A heartwarming adaptation of the classic novel about sisterhood, dreams, and growing up.",
        trailer_url: "https://www.youtube.com/watch?v=example",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German"],
        dubbing: &["Hindi", "Spanish"],
        poster_url: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2019,
        genres: &["Drama", "Romance", "Family"],
        runtime: "135 min",
        rationale: "You're feeling lonely and crave warmth: this beautiful story of sisterhood will surround you with love and remind you of the importance of family bonds.",
    },
    Seed {
        id: "15",
        name: "The Lunchbox",
        medium: Medium::Film,
        platforms: &["Netflix", "Prime Video"],
        rating: 7.8,
        mood_affinity: 89,
        synopsis: "A gentle Indian film about an unlikely friendship that develops through exchanged lunch boxes.",
        trailer_url: "https://www.youtube.com/watch?v=example",
        language: "Hindi",
        subtitles: &["English", "Tamil", "Telugu", "Kannada"],
        dubbing: &["English", "Tamil"],
        poster_url: "https://images.pexels.com/photos/1117132/pexels-photo-1117132.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2013,
        genres: &["Drama", "Romance"],
        runtime: "104 min",
        rationale: "You're feeling lonely and need human connection: this tender story shows how unexpected friendships can bloom and bring joy to everyday life.",
    },
    Seed {
        id: "16",
        name: "The Boys",
        medium: Medium::Series,
        platforms: &["Prime Video"],
        rating: 8.7,
        mood_affinity: 95,
        synopsis: "A dark, satirical take on superheroes that subverts the genre with shocking twists and social commentary.",
        trailer_url: "https://www.youtube.com/watch?v=example",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Hindi", "Spanish", "French"],
        poster_url: "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2019,
        genres: &["Action", "Comedy", "Crime"],
        runtime: "60 min episodes",
        rationale: "You're feeling bored and want something shocking: this twisted superhero series will keep you on the edge of your seat with its unpredictable storylines.",
    },
    Seed {
        id: "17",
        name: "Money Heist (La Casa de Papel)",
        medium: Medium::Series,
        platforms: &["Netflix"],
        rating: 8.2,
        mood_affinity: 93,
        synopsis: "A Spanish heist thriller that combines intricate plotting with emotional depth and unforgettable characters.",
        trailer_url: "https://www.youtube.com/watch?v=_InQhuuI6dk",
        language: "Spanish",
        subtitles: &["English", "Hindi", "Tamil", "Telugu", "French", "Portuguese"],
        dubbing: &["English", "Hindi", "French"],
        poster_url: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2017,
        genres: &["Crime", "Drama", "Thriller"],
        runtime: "70 min episodes",
        rationale: "You're feeling bored and want something mind-blowing: this Spanish series offers complex storytelling and emotional depth that will keep you completely engaged.",
    },
    Seed {
        id: "18",
        name: "Squid Game",
        medium: Medium::Series,
        platforms: &["Netflix"],
        rating: 8.0,
        mood_affinity: 91,
        synopsis: "A gripping Korean survival thriller that keeps you on the edge of your seat with social commentary.",
        trailer_url: "https://www.youtube.com/watch?v=oqxAJKy0ii4",
        language: "Korean",
        subtitles: &["English", "Hindi", "Tamil", "Telugu", "Spanish", "French"],
        dubbing: &["English", "Hindi", "Spanish"],
        poster_url: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2021,
        genres: &["Thriller", "Drama", "Action"],
        runtime: "60 min episodes",
        rationale: "You're feeling bored and want to be mind-blown: this Korean series offers intense storytelling that will completely captivate your attention.",
    },
    Seed {
        id: "19",
        name: "Inception",
        medium: Medium::Film,
        platforms: &["Netflix", "Prime Video"],
        rating: 8.8,
        mood_affinity: 95,
        synopsis: "A mind-bending sci-fi thriller about dreams within dreams, featuring stunning visuals and complex storytelling.",
        trailer_url: "https://www.youtube.com/watch?v=YoHD9XEInc0",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Hindi", "Spanish", "French"],
        poster_url: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2010,
        genres: &["Sci-Fi", "Action", "Thriller"],
        runtime: "148 min",
        rationale: "You want to be mind-blown: this Christopher Nolan masterpiece will challenge your perception of reality with its intricate plot and stunning execution.",
    },
    Seed {
        id: "20",
        name: "Interstellar",
        medium: Medium::Film,
        platforms: &["Prime Video", "Apple TV"],
        rating: 8.6,
        mood_affinity: 93,
        synopsis: "A space epic about love, sacrifice, and humanity's survival, featuring breathtaking visuals and emotional depth.",
        trailer_url: "https://www.youtube.com/watch?v=zSWdZVtXT7E",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Hindi", "Spanish", "French"],
        poster_url: "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2014,
        genres: &["Sci-Fi", "Drama", "Adventure"],
        runtime: "169 min",
        rationale: "You want to feel inspired and mind-blown: this Christopher Nolan epic combines stunning space visuals with a deeply emotional story about love transcending time and space.",
    },
    Seed {
        id: "21",
        name: "Minnal Murali",
        medium: Medium::Film,
        platforms: &["Netflix"],
        rating: 7.8,
        mood_affinity: 88,
        synopsis: "A Malayalam superhero film that combines humor, heart, and spectacular action in a small-town setting.",
        trailer_url: "https://www.youtube.com/watch?v=Ey73oTO7SuY",
        language: "Malayalam",
        subtitles: &["English", "Hindi", "Tamil", "Telugu", "Kannada"],
        dubbing: &["Hindi", "Tamil", "Telugu"],
        poster_url: "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2021,
        genres: &["Action", "Comedy", "Superhero"],
        runtime: "158 min",
        rationale: "You want to feel entertained and uplifted: this Malayalam superhero film offers the perfect blend of humor, heart, and spectacular action.",
    },
    Seed {
        id: "22",
        name: "Amélie",
        medium: Medium::Film,
        platforms: &["Prime Video", "Apple TV"],
        rating: 8.3,
        mood_affinity: 93,
        synopsis: "A whimsical French romantic comedy about a shy waitress who decides to help others find happiness.",
        trailer_url: "https://www.youtube.com/watch?v=MhodoG26EVs",
        language: "French",
        subtitles: &["English", "Spanish", "German", "Italian"],
        dubbing: &["English", "Spanish"],
        poster_url: "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2001,
        genres: &["Romance", "Comedy", "Drama"],
        runtime: "122 min",
        rationale: "You want to feel uplifted and relaxed: this charming French film offers a whimsical escape into a world of kindness and magical realism.",
    },
    Seed {
        id: "23",
        name: "Stranger Things",
        medium: Medium::Series,
        platforms: &["Netflix"],
        rating: 8.7,
        mood_affinity: 89,
        synopsis: "A supernatural thriller set in the 1980s about kids facing otherworldly dangers in their small town.",
        trailer_url: "https://www.youtube.com/watch?v=b9EkMc79ZSU",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Hindi", "Spanish", "French"],
        poster_url: "https://images.pexels.com/photos/1117132/pexels-photo-1117132.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2016,
        genres: &["Sci-Fi", "Horror", "Drama"],
        runtime: "50 min episodes",
        rationale: "You're feeling bored and want entertainment: this nostalgic sci-fi series combines 80s charm with supernatural thrills that will keep you binge-watching.",
    },
    Seed {
        id: "24",
        name: "La La Land",
        medium: Medium::Film,
        platforms: &["Netflix", "Prime Video"],
        rating: 8.0,
        mood_affinity: 92,
        synopsis: "A modern musical about love and dreams in Los Angeles, featuring stunning cinematography and memorable songs.",
        trailer_url: "https://www.youtube.com/watch?v=0pdqf4P9MB8",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Hindi", "Spanish"],
        poster_url: "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2016,
        genres: &["Musical", "Romance", "Drama"],
        runtime: "128 min",
        rationale: "You want to feel uplifted and inspired: this beautiful musical celebrates following your dreams with gorgeous visuals and an unforgettable soundtrack.",
    },
    Seed {
        id: "25",
        name: "Breaking Bad",
        medium: Medium::Series,
        platforms: &["Netflix", "Prime Video"],
        rating: 9.5,
        mood_affinity: 88,
        synopsis: "A high school chemistry teacher turned methamphetamine manufacturer in this gripping crime drama.",
        trailer_url: "https://www.youtube.com/watch?v=HhesaQXLuRY",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Hindi", "Spanish"],
        poster_url: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2008,
        genres: &["Crime", "Drama", "Thriller"],
        runtime: "47 min episodes",
        rationale: "You're ready to binge and want to be mind-blown: this critically acclaimed series offers intense storytelling and character development that will keep you hooked.",
    },
    Seed {
        id: "26",
        name: "The Dark Knight",
        medium: Medium::Film,
        platforms: &["Netflix", "Prime Video"],
        rating: 9.0,
        mood_affinity: 90,
        synopsis: "Batman faces his greatest challenge yet in the Joker, in this dark and gripping superhero masterpiece.",
        trailer_url: "https://www.youtube.com/watch?v=EXeTwQWrcwY",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Hindi", "Spanish", "French"],
        poster_url: "https://images.pexels.com/photos/1117132/pexels-photo-1117132.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2008,
        genres: &["Action", "Crime", "Drama"],
        runtime: "152 min",
        rationale: "You want to be entertained and mind-blown: this superhero epic redefined the genre with its dark themes, incredible performances, and stunning action sequences.",
    },
    Seed {
        id: "27",
        name: "Friends",
        medium: Medium::Series,
        platforms: &["Netflix", "Prime Video"],
        rating: 8.9,
        mood_affinity: 94,
        synopsis: "Six friends navigate life and love in New York City in this beloved sitcom that defined a generation.",
        trailer_url: "https://www.youtube.com/watch?v=hDNNmeeJs1Q",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Hindi", "Spanish"],
        poster_url: "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 1994,
        genres: &["Comedy", "Romance"],
        runtime: "22 min episodes",
        rationale: "You're feeling lonely and want to be uplifted: this timeless sitcom about friendship will make you laugh and feel like you're part of the group.",
    },
    Seed {
        id: "28",
        name: "Avengers: Endgame",
        medium: Medium::Film,
        platforms: &["Disney+", "Prime Video"],
        rating: 8.4,
        mood_affinity: 87,
        synopsis: "The epic conclusion to the Marvel Cinematic Universe's Infinity Saga, featuring spectacular action and emotional payoffs.",
        trailer_url: "https://www.youtube.com/watch?v=TcMBFSGVi1c",
        language: "English",
        subtitles: &["Hindi", "Spanish", "French", "German", "Italian"],
        dubbing: &["Hindi", "Spanish", "French"],
        poster_url: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400",
        year: 2019,
        genres: &["Action", "Adventure", "Sci-Fi"],
        runtime: "181 min",
        rationale: "You want to feel entertained and inspired: this superhero epic delivers incredible action, emotional moments, and the satisfying conclusion to a decade-long story.",
    },
];

/// Curated buckets as (dimension, answer value, title ids)
const BUCKETS: &[(Dimension, &str, &[&str])] = &[
    (Dimension::Mood, "Happy", &["1", "2", "3", "27"]),
    (Dimension::Mood, "Stressed", &["4", "5", "6", "22"]),
    (Dimension::Mood, "Tired", &["7", "8", "9", "24"]),
    (Dimension::Mood, "Anxious", &["10", "11", "12", "27"]),
    (Dimension::Mood, "Lonely", &["13", "14", "15", "27"]),
    (Dimension::Mood, "Bored", &["16", "17", "18", "23"]),
    (Dimension::Feeling, "Uplifted", &["1", "4", "21", "24"]),
    (Dimension::Feeling, "Entertained", &["2", "16", "23", "28"]),
    (Dimension::Feeling, "Relaxed", &["7", "8", "22", "15"]),
    (Dimension::Feeling, "Inspired", &["5", "20", "1", "24"]),
    (Dimension::Feeling, "Mind-blown", &["19", "25", "17", "26"]),
    (Dimension::Duration, "<30 min", &["3", "10", "6", "27"]),
    (Dimension::Duration, "~1 hr", &["7", "9", "8", "23"]),
    (Dimension::Duration, "2+ hrs", &["1", "2", "20", "26"]),
    (Dimension::Duration, "Binge-ready", &["25", "17", "16", "23"]),
    (Dimension::Company, "Solo", &["7", "13", "19", "8"]),
    (Dimension::Company, "Partner", &["14", "22", "24", "15"]),
    (Dimension::Company, "Friends", &["16", "27", "23", "17"]),
    (Dimension::Company, "Family", &["12", "28", "3", "21"]),
    (Dimension::Language, "Hindi", &["4", "15", "11"]),
    (Dimension::Language, "Tamil", &[]),
    (Dimension::Language, "Telugu", &["2"]),
    (Dimension::Language, "Kannada", &["1"]),
    (Dimension::Language, "Malayalam", &["21"]),
    (Dimension::Language, "English", &["19", "20", "10", "27", "25", "26"]),
    (Dimension::Language, "Korean", &["18"]),
    (Dimension::Language, "Spanish", &["17"]),
    (Dimension::Language, "French", &["22"]),
    (Dimension::Language, "Any", &["1", "2", "3", "4", "5", "6", "7", "8"]),
];

/// Kantara, RRR, Inception, Interstellar, ZNMD, Minnal Murali
const TRENDING: &[&str] = &["1", "2", "19", "20", "4", "21"];

pub fn titles() -> Vec<Title> {
    SEEDS.iter().map(Title::from).collect()
}

pub fn category_index() -> CategoryIndex {
    let mut index = CategoryIndex::default();
    for (dimension, value, ids) in BUCKETS {
        // Keep empty buckets so known answers are distinguishable from unknown ones
        index.buckets_mut(*dimension).entry(value.to_string()).or_default();
        for id in ids.iter() {
            index.insert(*dimension, value, TitleId::new(*id));
        }
    }
    index
}

pub fn trending() -> Vec<TitleId> {
    TRENDING.iter().map(|id| TitleId::new(*id)).collect()
}

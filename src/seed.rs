//! Seed data adopted the first time a key has nothing usable in storage.

use crate::constants::ADMIN_ID;
use crate::models::{Book, BookId, Student, StudentId, TitleMap};

/// `(id, name, level, renaissance id, renaissance password)`
const SEED_STUDENTS: &[(&str, &str, f64, &str, &str)] = &[
    ("s1", "윤세인", 1.0, "sein", "yoon"),
    ("s2", "윤세아", 1.0, "seah", "yoon"),
    ("s3", "구서윤", 1.0, "seoyoon", "koo"),
    ("s4", "김리안", 2.0, "rian", "kim"),
    ("s5", "최도연", 1.0, "doyeon", "choi"),
    ("s6", "하예린", 1.0, "yerin", "ha"),
    ("s7", "홍예서", 1.0, "yeseo h", "hong"),
    ("s8", "권서린", 1.0, "seorin", "kwon"),
    ("s9", "국태완", 1.0, "taewan", "kook"),
    ("s10", "강연우", 2.0, "yeonu", "kang"),
    ("s11", "이소민", 0.0, "somin", "lee"),
    ("s12", "김재이", 1.0, "jaye", "kim"),
    ("s13", "이윤서", 1.0, "yoonseo lee", "lee"),
    ("s14", "방서윤", 2.0, "seoyun", "bang"),
];

/// `(id, title, author, level)`
const SEED_BOOKS: &[(&str, &str, &str, f64)] = &[
    ("b801", "Amazing Dolphins", "Thomson, Sarah L.", 3.5),
    ("b802", "Ranger Rick: I Wish I Was a Monarch Butterfly", "Bové, Jennifer", 3.5),
    ("b803", "Amazing Gorillas!", "Thomson, Sarah L.", 3.5),
    ("b804", "Curious George Goes to the Zoo", "Platt, Cynthia", 3.1),
    ("b805", "Curious George and the Ice Cream Surprise", "Perez, Monica", 3.2),
    ("b806", "Curious George Feeds the Animals", "Rey, Margret", 3.3),
    ("b807", "Curious George Goes to a Chocolate Factory", "Rey, Margret", 3.5),
    ("b808", "Curious George Saves His Pennies", "Perez, Monica", 3.3),
    ("b809", "Curious George", "Rey, H.A.", 2.6),
    ("b810", "Sweet Dreams, Curious George", "Platt, Cynthia", 3.3),
    ("b811", "How a House Is Built", "Gibbons, Gail", 3.7),
    ("b812", "Shrek!", "Steig, William", 3.9),
    ("b813", "Pumpkin Soup", "Cooper, Helen", 3.1),
    ("b814", "Sadie and the Snowman", "Morgan, Allen", 3.5),
    ("b815", "Morning Bath", "Cowley, Joy", 2.9),
    ("b816", "Save Me, Smee!", "LaRose, Melinda", 2.7),
    ("b817", "The Big Balloon Race", "Coerr, Eleanor", 2.6),
    ("b818", "Mercy Watson Fights Crime", "DiCamillo, Kate", 2.6),
    ("b819", "The Absent Author", "Roy, Ron", 3.4),
    ("b820", "The Falcon's Feathers", "Roy, Ron", 3.3),
    ("b821", "The Empty Envelope", "Roy, Ron", 3.5),
    ("b822", "The Deadly Dungeon", "Roy, Ron", 3.4),
    ("b823", "The Bald Bandit", "Roy, Ron", 3.2),
    ("b824", "The Invisible Island", "Roy, Ron", 3.6),
    ("b825", "The Jaguar's Jewel", "Roy, Ron", 3.5),
    ("b826", "The Haunted Hotel", "Roy, Ron", 3.4),
    ("b827", "The Canary Caper", "Roy, Ron", 3.4),
    ("b828", "The Goose's Gold", "Roy, Ron", 3.3),
    ("b829", "Twister on Tuesday", "Osborne, Mary Pope", 3.2),
    ("b830", "Dinosaurs Before Dark", "Osborne, Mary Pope", 2.6),
    ("b831", "The Knight at Dawn", "Osborne, Mary Pope", 2.9),
    ("b832", "Dingoes at Dinnertime", "Osborne, Mary Pope", 3.2),
    ("b833", "Mummies in the Morning", "Osborne, Mary Pope", 2.7),
    ("b834", "Revolutionary War on Wednesday", "Osborne, Mary Pope", 3.5),
    ("b835", "Vacation Under the Volcano", "Osborne, Mary Pope", 3.3),
    ("b836", "Buffalo Before Breakfast", "Osborne, Mary Pope", 3.3),
    ("b837", "Tigers at Twilight", "Osborne, Mary Pope", 3.0),
    ("b838", "Thanksgiving on Thursday", "Osborne, Mary Pope", 3.3),
    ("b839", "Earthquake in the Early Morning", "Osborne, Mary Pope", 3.3),
    ("b840", "Stage Fright on a Summer Night", "Osborne, Mary Pope", 3.3),
    ("b841", "Good Morning, Gorillas", "Osborne, Mary Pope", 3.3),
    ("b842", "Day of the Dragon King", "Osborne, Mary Pope", 3.3),
    ("b843", "High Tide in Hawaii", "Osborne, Mary Pope", 3.4),
    ("b844", "Ghost Town at Sundown", "Osborne, Mary Pope", 3.0),
    ("b845", "Lions at Lunchtime", "Osborne, Mary Pope", 3.0),
    ("b846", "Dolphins at Daybreak", "Osborne, Mary Pope", 3.1),
    ("b847", "Tonight on the Titanic", "Osborne, Mary Pope", 3.1),
    ("b848", "Polar Bears Past Bedtime", "Osborne, Mary Pope", 3.3),
    ("b849", "Sunset of the Sabertooth", "Osborne, Mary Pope", 3.0),
    ("b850", "Tales of a Fourth Grade Nothing", "Blume, Judy", 3.3),
    ("b851", "Freckle Juice", "Blume, Judy", 3.1),
    ("b852", "Monkey me and the school ghost", "Roland, Timothy", 2.5),
    ("b853", "Monkey Me and the Pet Show", "Roland, Timothy", 2.2),
    ("b854", "Monkey Me and the Golden Monkey", "Roland, Timothy", 2.4),
    ("b855", "Hey, Al", "Yorinks, Arthur", 2.1),
    ("b856", "The Paperboy", "Pilkey, Dav", 2.9),
    ("b857", "Don't Let the Pigeon Drive the Bus!", "Willems, Mo", 0.9),
    ("b858", "Anna's Icy Adventure", "Allen, Elise", 3.6),
    ("b859", "Amelia Bedelia by the Yard", "Parish, Herman", 2.6),
    ("b860", "To the Rescue!", "Mayer, Mercer", 1.2),
    ("b861", "The Camping Trip", "Hapka, Catherine", 2.2),
    ("b862", "Green Eyes", "Birnbaum, Abe", 2.8),
    ("b863", "Mittens", "Schaefer, Lola M.", 1.2),
    ("b864", "Follow me, Mittens", "Schaefer, Lola M.", 1.6),
    ("b865", "What's that, Mittens?", "Schaefer, Lola M.", 1.0),
    ("b866", "Mittens, Where Is Max", "Schaefer, Lola M.", 0.8),
    ("b867", "Happy Halloween, Mittens", "Schaefer, Lola M.", 1.5),
    ("b868", "Mittens at School", "Schaefer, Lola M.", 1.2),
    ("b869", "Noodleheads See the Future (AR 1.8)", "Arnold, Tedd", 1.8),
    ("b870", "Noodleheads Find Something Fishy (AR 1.8)", "Arnold, Tedd", 1.8),
    ("b871", "Noodlehead Nightmares (AR 1.9)", "Arnold, Tedd", 1.9),
    ("b872", "Noodleheads Fortress of Doom (AR 2.0)", "Arnold, Tedd", 2.0),
    ("b873", "Noodleheads Lucky Day (AR 1.7)", "Arnold, Tedd", 1.7),
    ("b874", "Noodleheads Do the Impossible (AR 2.0)", "Arnold, Tedd", 2.0),
    ("b875", "Noodleheads Take it Easy (AR 2.1)", "Arnold, Tedd", 2.1),
    ("b876", "Flat Stanley and the Firehouse (AR 2.4)", "Houran, Lori Haskins", 2.4),
    ("b877", "Flat Stanley and the Haunted House (AR 2.2)", "Houran, Lori Haskins", 2.2),
    ("b878", "Flat Stanley Show-and-Tall, Flat Stanley! (AR 2.7)", "Houran, Lori Haskins", 2.7),
    ("b879", "Flat Stanley at Bat (AR 2.3)", "Houran, Lori Haskins", 2.3),
    ("b880", "Flat Stanley Goes Camping (AR 2.4)", "Houran, Lori Haskins", 2.4),
    ("b881", "Flat Stanley and the Very Big Cookie (AR 2.6)", "Houran, Lori Haskins", 2.6),
    ("b882", "Flat Stanley on Ice (AR 2.5)", "Houran, Lori Haskins", 2.5),
    ("b883", "Flat Stanley and the Lost Treasure (AR 2.5)", "Houran, Lori Haskins", 2.5),
    ("b884", "Flat Stanley and the Missing Pumpkins (AR 2.6)", "Houran, Lori Haskins", 2.6),
    ("b885", "Flat Stanley and the Bees (AR 2.2)", "Houran, Lori Haskins", 2.2),
    ("b886", "Queen of the World! (AR 2.2)", "Holm, Jennifer L.", 2.2),
    ("b887", "Our Hero! (AR 2.0)", "Holm, Jennifer L.", 2.0),
    ("b888", "Beach Babe (AR 2.0)", "Holm, Jennifer L.", 2.0),
    ("b889", "Rock Star (AR 1.9)", "Holm, Jennifer L.", 1.9),
    ("b890", "Heartbreaker (AR 2.0)", "Holm, Jennifer L.", 2.0),
    ("b891", "Camp Babymouse (AR 2.0)", "Holm, Jennifer L.", 2.0),
    ("b892", "Skater Girl (AR 2.2)", "Holm, Jennifer L.", 2.2),
    ("b893", "Puppy Love (AR 1.8)", "Holm, Jennifer L.", 1.8),
    ("b894", "Monster Mash (AR 1.9)", "Holm, Jennifer L.", 1.9),
    ("b895", "The Musical (AR 2.1)", "Holm, Jennifer L.", 2.1),
    ("b896", "Dragonslayer (AR 2.6)", "Holm, Jennifer L.", 2.6),
    ("b897", "Cupcake Tycoon (AR 2.2)", "Holm, Jennifer L.", 2.2),
    ("b898", "Mad Scientist (AR 2.6)", "Holm, Jennifer L.", 2.6),
    ("b899", "A Very Babymouse Christmas (AR 2.1)", "Holm, Jennifer L.", 2.1),
    ("b900", "Babymouse for President (AR 2.6)", "Holm, Jennifer L.", 2.6),
    ("b901", "Extreme Babymouse (AR 2.3)", "Holm, Jennifer L.", 2.3),
    ("b902", "Happy Birthday, Babymouse (AR 2.4)", "Holm, Jennifer L.", 2.4),
    ("b903", "Bad Babysitter (AR 2.3)", "Holm, Jennifer L.", 2.3),
    ("b904", "Goes for the Gold (AR 2.3)", "Holm, Jennifer L.", 2.3),
    ("b905", "Burns Rubber (AR 2.2)", "Holm, Jennifer L.", 2.2),
    ("b906", "All by Myself (AR 1.3)", "Mayer, Mercer", 1.3),
    ("b907", "Just Me and My Babysitter (AR 1.3)", "Mayer, Mercer", 1.3),
    ("b908", "Just Me and My Dad (AR 1.4)", "Mayer, Mercer", 1.4),
    ("b909", "Just a Mess (AR 1.5)", "Mayer, Mercer", 1.5),
    ("b910", "Me Too! (AR 1.5)", "Mayer, Mercer", 1.5),
    ("b911", "Just Shopping With Mom (AR 1.7)", "Mayer, Mercer", 1.7),
    ("b912", "Just Me and My Puppy (AR 1.6)", "Mayer, Mercer", 1.6),
    ("b913", "I Was So Mad (AR 1.6)", "Mayer, Mercer", 1.6),
    ("b914", "The New Baby (AR 1.9)", "Mayer, Mercer", 1.9),
    ("b915", "Just Grandma and Me (AR 1.9)", "Mayer, Mercer", 1.9),
    ("b916", "Just Grandpa and Me (AR 1.9)", "Mayer, Mercer", 1.9),
    ("b917", "Just My Friend and Me (AR 1.9)", "Mayer, Mercer", 1.9),
    ("b918", "I Just Forgot (AR 2.0)", "Mayer, Mercer", 2.0),
    ("b919", "The New Potty (AR 2.0)", "Mayer, Gina", 2.0),
    ("b920", "Just for You (AR 2.0)", "Mayer, Mercer", 2.0),
    ("b921", "Just Go to Bed (AR 2.0)", "Mayer, Mercer", 2.0),
    ("b922", "What a Bad Dream (AR 2.1)", "Mayer, Mercer", 2.1),
    ("b923", "Just Me and My Mom (AR 2.2)", "Mayer, Mercer", 2.2),
    ("b924", "When I Grow Up (AR 2.2)", "Mayer, Mercer", 2.2),
    ("b925", "When I Get Bigger (AR 2.2)", "Mayer, Mercer", 2.2),
    ("b926", "Happy Easter, Little Critter (AR 2.3)", "Mayer, Mercer", 2.3),
    ("b927", "Just Going to the Dentist (AR 2.4)", "Mayer, Mercer", 2.4),
    ("b928", "Merry Christmas Mom and Dad (AR 2.4)", "Mayer, Mercer", 2.4),
    ("b929", "Just Me and My Little Brother (AR 2.5)", "Mayer, Mercer", 2.5),
    ("b930", "Mia and the daisy dance", "Farley, Robin", 1.2),
    ("b931", "Mia jazzes it up", "Farley, Robin", 1.8),
    ("b932", "Mia and the dance for two", "Farley, Robin", 1.4),
    ("b933", "Mia and the girl with a twirl", "Farley, Robin", 1.7),
    ("b934", "Mia sets the stage", "Farley, Robin", 1.5),
    ("b935", "Mia and the big sister ballet", "Farley, Robin", 1.4),
    ("b936", "Mia and the too big tutu", "Farley, Robin", 1.3),
    ("b937", "Mia and tiny toe shoes", "Farley, Robin", 1.6),
    ("b938", "Splat the cat: blow, snow, blow", "Hsu Lin, Amy", 2.0),
    ("b939", "Splat the cat: and the hotshot", "Driscoll, Laura", 2.3),
    ("b940", "Splat the cat: the rain is a pain", "Hsu Lin, Amy", 1.9),
    ("b941", "Splat the cat: I scream for ice cream", "Driscoll, Laura", 2.2),
    ("b942", "Splat the cat: twice the mice", "Resnick, Jacqueline", 2.1),
    ("b943", "Splat the cat: and the duck with no quack", "Scotton, Rob", 2.3),
    ("b944", "Splat the cat: good night, sleep tight", "Engel, Natalie", 2.0),
    ("b945", "Splat the cat: up in the air at the fair", "Hsu Lin, Amy", 2.5),
    ("b946", "Splat the cat: and the quick chicks", "Driscoll, Laura", 2.2),
    ("b947", "Splat the cat: splat and seymour, best friends forevermore", "Heyman, Alissa", 2.6),
    ("b948", "Splat the cat: with a bang and a clang", "Hsu Lin, Amy", 2.0),
    ("b949", "Splat the cat: a whale of a tale", "Hsu Lin, Amy", 2.0),
    ("b950", "Splat the cat: takes the cake", "Hsu Lin, Amy", 2.1),
    ("b951", "Splat the cat: sings flat", "Strathearn, Chris", 1.8),
    ("b952", "Splat the cat: makes dad glad", "Heyman, Alissa", 2.5),
    ("b953", "Horrid Henry Gets Rich Quick", "Simon, Francesca", 3.3),
    ("b954", "Sunlight on the Snow Leopard", "Osborne, Mary Pope", 3.2),
    ("b955", "Camp Time in California", "Osborne, Mary Pope", 3.5),
    ("b956", "Late Lunch with Llamas", "Osborne, Mary Pope", 3.4),
    ("b957", "Narwhal on a Sunny Night", "Osborne, Mary Pope", 3.4),
    ("b958", "To the Future, Ben Franklin!", "Osborne, Mary Pope", 3.5),
    ("b959", "Junie B., First Grader: One-Man Band", "Park, Barbara", 3.0),
    ("b960", "Junie B., First Grader: Shipwrecked", "Park, Barbara", 3.1),
    ("b961", "Junie B., First Grader: Cheater Pants", "Park, Barbara", 3.1),
    ("b962", "Junie B., First Grader: Turkeys We have Loved and Eaten (and Other Thankful Stuff)", "Park, Barbara", 2.9),
    ("b963", "Junie B., First Grader: Dumb Bunny", "Park, Barbara", 2.8),
    ("b964", "Junie B., First Grader: Aloha-ha-ha!", "Park, Barbara", 2.8),
    ("b965", "Junie B., First Grader: Jingle Bells, Batman Smells! (P.S. So Does May)", "Park, Barbara", 2.8),
    ("b966", "Junie B., First Grader: Boo...and I Mean It!", "Park, Barbara", 2.9),
    ("b967", "Junie B., First Grader: Toothless Wonder", "Park, Barbara", 2.8),
    ("b968", "Junie B., First Grader: Boss of Lunch", "Park, Barbara", 2.8),
    ("b969", "Junie B., First Grader (at Last!)", "Park, Barbara", 2.6),
    ("b970", "Junie B. Jones Is a Graduation Girl", "Park, Barbara", 3.0),
    ("b971", "Junie B. Jones Is Captain Field Day", "Park, Barbara", 2.8),
    ("b972", "Junie B. Jones Has a Peep in Her Pocket", "Park, Barbara", 2.9),
    ("b973", "Junie B. Jones and the Mushy Gushy Valentime", "Park, Barbara", 2.9),
    ("b974", "Junie B. Jones Is (Almost) a Flower Girl", "Park, Barbara", 2.7),
    ("b975", "Junie B. Jones Smells Something Fishy", "Park, Barbara", 2.6),
    ("b976", "Junie B. Jones Is a Beauty Shop Guy", "Park, Barbara", 2.8),
    ("b977", "Junie B. Jones Is a Party Animal", "Park, Barbara", 2.8),
    ("b978", "Junie B. Jones Is Not a Crook", "Park, Barbara", 3.0),
    ("b979", "Junie B. Jones Has a Monster Under Her Bed", "Park, Barbara", 2.7),
    ("b980", "Junie B. Jones Loves Handsome Warren", "Park, Barbara", 2.7),
    ("b981", "Junie B. Jones and That Meanie Jim's Birthday", "Park, Barbara", 2.8),
    ("b982", "Night of the Ninjas", "Osborne, Mary Pope", 2.7),
    ("b983", "Pirates Past Noon", "Osborne, Mary Pope", 2.8),
    ("b984", "Mummies in the Morning", "Osborne, Mary Pope", 2.7),
    ("b985", "The Knight at Dawn", "Osborne, Mary Pope", 2.9),
    ("b986", "Dinosaurs Before Dark", "Osborne, Mary Pope", 2.6),
    ("b987", "Butterfly Garden", "McNamara, Margaret", 2.2),
    ("b988", "Picking Apples", "McNamara, Margaret", 1.5),
    ("b989", "Snow Day", "McNamara, Margaret", 1.3),
    ("b990", "The Playground Problem", "McNamara, Margaret", 1.5),
    ("b991", "Earth Day", "McNamara, Margaret", 2.2),
    ("b992", "Halloween Fun", "McNamara, Margaret", 1.2),
    ("b993", "Summer Treasure", "McNamara, Margaret", 1.7),
    ("b994", "Class Picture Day", "McNamara, Margaret", 1.7),
    ("b995", "Class Mom", "McNamara, Margaret", 1.5),
    ("b996", "Dad Goes to School", "McNamara, Margaret", 1.4),
    ("b997", "One Hundred Days (Plus One)", "McNamara, Margaret", 2.2),
    ("b998", "The Counting Race", "McNamara, Margaret", 1.4),
    ("b999", "Groundhog Day", "McNamara, Margaret", 1.7),
    ("b1000", "The Pumpkin Patch", "McNamara, Margaret", 1.5),
];

pub fn initial_students() -> Vec<Student> {
    let mut students: Vec<Student> = SEED_STUDENTS
        .iter()
        .map(|&(id, name, level, renaissance_id, renaissance_pw)| Student {
            id: StudentId::new_unchecked(id),
            name: name.to_string(),
            level,
            renaissance_id: Some(renaissance_id.to_string()),
            renaissance_pw: Some(renaissance_pw.to_string()),
        })
        .collect();

    students.push(Student {
        id: StudentId::new_unchecked(ADMIN_ID),
        name: "Admin".to_string(),
        level: 99.0,
        renaissance_id: None,
        renaissance_pw: None,
    });

    students
}

pub fn initial_books() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|&(id, title, author, level)| Book {
            id: BookId::new_unchecked(id),
            title: title.to_string(),
            author: author.to_string(),
            level,
        })
        .collect()
}

pub fn initial_excerpts() -> TitleMap {
    TitleMap::default()
}

pub fn initial_audio_links() -> TitleMap {
    TitleMap::default()
}

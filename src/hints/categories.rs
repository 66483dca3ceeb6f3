// File: src/hints/categories.rs
//! Category/usage sentences for the second hint, looked up by exact word.

pub struct Category {
    pub name: &'static str,
    pub words: &'static [&'static str],
    pub kind: &'static str,
    pub contexts: &'static [&'static str],
}

pub const GENERIC_DESCRIPTION: &str = "This is a common English word";

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "personal_abilities",
        words: &["able", "adapt", "alert", "alive"],
        kind: "This describes someone's capability",
        contexts: &[
            "Tells you what someone can do",
            "About a person's state or ability",
            "Describes potential or readiness",
        ],
    },
    Category {
        name: "laboratory_science",
        words: &["acid", "atom", "beam"],
        kind: "This is used in science",
        contexts: &["Found in a laboratory", "Part of scientific processes", "Related to chemistry or physics"],
    },
    Category {
        name: "performance_entertainment",
        words: &["actor", "audio", "band", "dance"],
        kind: "This relates to entertainment",
        contexts: &["Part of performances or shows", "Related to entertainment industry", "Involves performing arts"],
    },
    Category {
        name: "military_defense",
        words: &["armor", "bomb", "blast"],
        kind: "This relates to military or defense",
        contexts: &["Used in warfare or protection", "Military-related item", "About combat or defense"],
    },
    Category {
        name: "outdoor_recreation",
        words: &["beach", "bike", "camp", "climb"],
        kind: "This relates to outdoor activities",
        contexts: &["Something for outdoor fun", "Related to recreation outside", "Part of outdoor adventures"],
    },
    Category {
        name: "baking_cooking",
        words: &["baker", "blend", "boil", "bread", "cake"],
        kind: "This relates to making food",
        contexts: &["Found in the kitchen", "Used when cooking or baking", "Part of food preparation"],
    },
    Category {
        name: "building_construction",
        words: &["brick", "build", "cabin"],
        kind: "This relates to construction",
        contexts: &["Used in building things", "Part of construction", "Related to structures"],
    },
    Category {
        name: "movement_actions",
        words: &["burst", "carry", "catch", "chase", "climb"],
        kind: "This is a way of moving",
        contexts: &["A type of movement", "How things or people move", "An action involving motion"],
    },
    Category {
        name: "leadership_authority",
        words: &["chief", "crown"],
        kind: "This relates to leadership",
        contexts: &["Associated with being in charge", "About authority or power", "Related to ruling or leading"],
    },
    Category {
        name: "time_periods",
        words: &["dawn", "day", "dusk"],
        kind: "This is about time",
        contexts: &["A specific time period", "Related to when things happen", "Part of how we track time"],
    },
    Category {
        name: "animal_creatures",
        words: &["deer", "duck"],
        kind: "This is a living creature",
        contexts: &["An animal you might see", "A type of wildlife", "A living being"],
    },
    Category {
        name: "computer_technology",
        words: &["code", "data", "disk"],
        kind: "This relates to technology",
        contexts: &["Used with computers", "Part of technology", "Digital or electronic related"],
    },
    Category {
        name: "earth_nature",
        words: &["earth", "field", "forest", "grass", "grove", "island"],
        kind: "This is part of the natural world",
        contexts: &["Found in nature", "Part of the outdoor environment", "A natural feature of the land"],
    },
    Category {
        name: "positions_directions",
        words: &["east", "edge", "enter"],
        kind: "This relates to position or direction",
        contexts: &["Tells you where things are", "About location or movement", "Helps with navigation"],
    },
    Category {
        name: "feelings_emotions",
        words: &["empty", "faith", "favor", "fear", "grace", "happy", "hope", "calm"],
        kind: "This is a feeling or state of mind",
        contexts: &["An emotion people feel", "A state of mind", "About how someone feels"],
    },
    Category {
        name: "competition_games",
        words: &["event", "fight", "game"],
        kind: "This relates to competition or sports",
        contexts: &["Involves competition", "Part of games or sports", "About competing or playing"],
    },
    Category {
        name: "fire_heat",
        words: &["fire", "flame", "flash", "ember", "blaze"],
        kind: "This gives off heat",
        contexts: &["Produces heat or light", "Related to burning", "About intense energy"],
    },
    Category {
        name: "water_liquids",
        words: &["flood", "fluid", "foam"],
        kind: "This involves liquid or water",
        contexts: &["Related to water or fluids", "Something that flows", "About liquid states"],
    },
    Category {
        name: "food_edibles",
        words: &["flour", "fruit", "food", "apple", "grape", "berry"],
        kind: "This is something you can eat",
        contexts: &["Something edible", "Related to meals", "Used for eating or cooking"],
    },
    Category {
        name: "power_energy",
        words: &["force", "fuel"],
        kind: "This relates to power or energy",
        contexts: &["Provides power or energy", "Makes things work or move", "Source of strength"],
    },
    Category {
        name: "valuable_materials",
        words: &["glass", "gold", "silver"],
        kind: "This is a valuable material",
        contexts: &["A material used to make things", "Something of value", "Used in crafting or building"],
    },
    Category {
        name: "growth_improvement",
        words: &["grain", "grand", "great", "grow"],
        kind: "This relates to growth or quality",
        contexts: &["About becoming better or bigger", "Related to improvement", "Describes development"],
    },
    Category {
        name: "protection_defense",
        words: &["guard", "guide"],
        kind: "This helps keep things safe",
        contexts: &["Provides protection or guidance", "Helps prevent problems", "Keeps things secure"],
    },
    Category {
        name: "body_parts",
        words: &["hair", "hand", "head", "heart"],
        kind: "This is part of the body",
        contexts: &["Part of human anatomy", "Everyone has this", "A body part you use"],
    },
    Category {
        name: "building_places",
        words: &["hall", "harbor", "home", "hotel", "house", "museum"],
        kind: "This is a place or building",
        contexts: &["A place people use", "A type of building", "Somewhere people go"],
    },
    Category {
        name: "temperature_weather",
        words: &["heat", "hot"],
        kind: "This relates to temperature",
        contexts: &["About how warm things are", "Related to temperature", "Affects how things feel"],
    },
    Category {
        name: "landscape_features",
        words: &["hill", "hedge"],
        kind: "This is a feature of the land",
        contexts: &["Part of the landscape", "A natural or made formation", "Something you see outdoors"],
    },
    Category {
        name: "frozen_cold",
        words: &["ice"],
        kind: "This relates to cold temperatures",
        contexts: &["Found in freezing conditions", "Very cold substance", "Makes things cold"],
    },
    Category {
        name: "pictures_visuals",
        words: &["image", "index"],
        kind: "This helps show or organize information",
        contexts: &[
            "Used to display or find things",
            "Helps organize information",
            "Makes things easier to understand",
        ],
    },
    Category {
        name: "writing_materials",
        words: &["ink", "journal"],
        kind: "This is used for writing",
        contexts: &["Used to record things", "Helps create written works", "Part of writing process"],
    },
    Category {
        name: "metal_materials",
        words: &["iron", "steel"],
        kind: "This is a strong material",
        contexts: &["A type of metal", "Used to make strong things", "Found in construction"],
    },
    Category {
        name: "precious_materials",
        words: &["ivory", "jade", "jewel"],
        kind: "This is something valuable",
        contexts: &["A precious material", "Used in valuable items", "Considered treasured"],
    },
    Category {
        name: "music_sound",
        words: &["jazz", "music", "chord", "flute"],
        kind: "This relates to musical sound",
        contexts: &["About sounds and rhythm", "Part of musical expression", "Related to performing"],
    },
    Category {
        name: "happiness_positive",
        words: &["joy", "jolly"],
        kind: "This describes happiness",
        contexts: &["A happy feeling", "About being cheerful", "Positive emotion"],
    },
    Category {
        name: "authority_law",
        words: &["judge", "king"],
        kind: "This relates to authority",
        contexts: &["Someone in charge", "Has power over others", "Makes important decisions"],
    },
    Category {
        name: "food_drinks",
        words: &["juice"],
        kind: "This is something to drink",
        contexts: &["A beverage", "Something you can drink", "Liquid refreshment"],
    },
    Category {
        name: "everyday_actions",
        words: &["jump", "keen", "keep"],
        kind: "This is something you do",
        contexts: &["An action or movement", "Something active", "A way of doing things"],
    },
    Category {
        name: "tools_devices",
        words: &["key", "knife", "label", "lamp", "laser", "lens", "clock"],
        kind: "This is a tool or device",
        contexts: &["Used to help do things", "A useful object", "Helps accomplish tasks"],
    },
    Category {
        name: "water_features",
        words: &["lake", "river", "pond", "stream", "reef"],
        kind: "This is a body of water",
        contexts: &["Contains water", "Natural water feature", "Found outdoors"],
    },
    Category {
        name: "ground_earth",
        words: &["land"],
        kind: "This relates to the ground",
        contexts: &["Part of the earth", "Where things grow", "Solid ground"],
    },
    Category {
        name: "plants_nature",
        words: &["leaf"],
        kind: "This is part of plants",
        contexts: &["Found on plants", "Part of nature", "Grows naturally"],
    },
    Category {
        name: "illumination_light",
        words: &["light"],
        kind: "This relates to brightness",
        contexts: &["Helps you see", "Provides illumination", "Makes things visible"],
    },
    Category {
        name: "animals_wildlife",
        words: &["lion"],
        kind: "This is a wild animal",
        contexts: &["A powerful creature", "Found in nature", "A type of beast"],
    },
    Category {
        name: "connections_links",
        words: &["link", "loop"],
        kind: "This connects things",
        contexts: &["Joins things together", "Creates connections", "Makes things relate"],
    },
    Category {
        name: "fortune_chance",
        words: &["luck", "lunar"],
        kind: "This relates to fortune or cycles",
        contexts: &["About chance or timing", "Related to fortune", "Natural patterns"],
    },
    Category {
        name: "food_meals",
        words: &["lunch", "meal"],
        kind: "This is about eating",
        contexts: &["Related to food", "Time for eating", "Part of daily routine"],
    },
    Category {
        name: "mystical_supernatural",
        words: &["magic", "myth", "ghost", "fairy"],
        kind: "This relates to supernatural things",
        contexts: &["Beyond ordinary life", "About special powers", "Mysterious or magical"],
    },
    Category {
        name: "communication_messages",
        words: &["mail", "mark"],
        kind: "This relates to communication",
        contexts: &["Used to send messages", "Helps share information", "Way of communicating"],
    },
    Category {
        name: "trees_wood",
        words: &["maple"],
        kind: "This is a type of tree",
        contexts: &["Grows in forests", "A kind of tree", "Natural wood source"],
    },
    Category {
        name: "time_progression",
        words: &["march"],
        kind: "This relates to time passing",
        contexts: &["About moving forward", "Related to progress", "Movement through time"],
    },
    Category {
        name: "achievements_recognition",
        words: &["medal"],
        kind: "This is a reward",
        contexts: &["Given for achievement", "Shows recognition", "Symbol of success"],
    },
    Category {
        name: "substances_materials",
        words: &["metal"],
        kind: "This is a material",
        contexts: &["Used to make things", "A basic material", "Found in construction"],
    },
    Category {
        name: "thought_mental",
        words: &["mind", "might"],
        kind: "This relates to thinking or power",
        contexts: &["About mental processes", "Related to thoughts", "Shows capability"],
    },
    Category {
        name: "reflection_surfaces",
        words: &["mirror"],
        kind: "This shows reflections",
        contexts: &["Shows you images", "Reflects what it sees", "Used to see yourself"],
    },
    Category {
        name: "night_darkness",
        words: &["night", "noon"],
        kind: "This is a time of day",
        contexts: &["A specific time period", "Part of every day", "When sun changes position"],
    },
    Category {
        name: "status_rank",
        words: &["noble"],
        kind: "This relates to social status",
        contexts: &["About social position", "A respected rank", "Higher class status"],
    },
    Category {
        name: "direction_location",
        words: &["north"],
        kind: "This is a direction",
        contexts: &["Helps with navigation", "A compass direction", "Shows which way to go"],
    },
    Category {
        name: "writing_text",
        words: &["note", "novel", "poem", "story", "diary", "verse"],
        kind: "This relates to writing",
        contexts: &["Contains written words", "Used to record thoughts", "Involves reading"],
    },
    Category {
        name: "medical_care",
        words: &["nurse"],
        kind: "This is a medical profession",
        contexts: &["Helps sick people", "Works in healthcare", "Takes care of others"],
    },
    Category {
        name: "large_water",
        words: &["ocean", "sea"],
        kind: "This is a large body of water",
        contexts: &["Contains lots of water", "Bigger than a lake", "Where ships sail"],
    },
    Category {
        name: "food_plants",
        words: &["olive"],
        kind: "This is an edible plant product",
        contexts: &["Can be eaten", "Grows on trees", "Used in cooking"],
    },
    Category {
        name: "space_movement",
        words: &["orbit"],
        kind: "This is about circular movement",
        contexts: &["A path something follows", "Related to space", "Goes around something"],
    },
    Category {
        name: "arrangement_sequence",
        words: &["order"],
        kind: "This relates to arrangement",
        contexts: &["About organizing things", "Puts things in sequence", "Makes things systematic"],
    },
    Category {
        name: "body_parts_functions",
        words: &["organ"],
        kind: "This is inside living things",
        contexts: &["Part of the body", "Important for life", "Internal body part"],
    },
    Category {
        name: "movement_speed",
        words: &["pace"],
        kind: "This is about movement speed",
        contexts: &["How fast something goes", "Rate of movement", "Speed of action"],
    },
    Category {
        name: "art_creation",
        words: &["paint"],
        kind: "This relates to making art",
        contexts: &["Used to create pictures", "Makes things colorful", "Artists use this"],
    },
    Category {
        name: "trees_plants",
        words: &["palm", "pine", "cedar", "fern"],
        kind: "This is a type of tree",
        contexts: &["A kind of tree", "Grows naturally", "Found in nature"],
    },
    Category {
        name: "paper_materials",
        words: &["paper"],
        kind: "This is used for writing",
        contexts: &["Used to record things", "Can write on this", "Made from trees"],
    },
    Category {
        name: "outdoor_spaces",
        words: &["park", "path"],
        kind: "This is an outdoor place",
        contexts: &["People visit here", "Found outside", "A place to go"],
    },
    Category {
        name: "tranquility_harmony",
        words: &["peace"],
        kind: "This is a peaceful state",
        contexts: &["About calmness", "Lack of conflict", "Peaceful condition"],
    },
    Category {
        name: "valuable_objects",
        words: &["pearl"],
        kind: "This is something precious",
        contexts: &["A valuable item", "Found in nature", "Used in jewelry"],
    },
    Category {
        name: "writing_tools",
        words: &["pen"],
        kind: "This is for writing",
        contexts: &["Used to make marks", "Writes things down", "Tool for recording"],
    },
    Category {
        name: "stages_changes",
        words: &["phase"],
        kind: "This is about stages or changes",
        contexts: &["Part of a process", "A period of change", "One step of many"],
    },
    Category {
        name: "music_instruments",
        words: &["piano"],
        kind: "This is a musical instrument",
        contexts: &["Makes music", "Used by musicians", "Found in concerts"],
    },
    Category {
        name: "aviation_flying",
        words: &["pilot"],
        kind: "This relates to flying",
        contexts: &["Works with aircraft", "Controls flight", "In charge of planes"],
    },
    Category {
        name: "plumbing_flow",
        words: &["pipe"],
        kind: "This carries things through it",
        contexts: &["Things flow through it", "Part of plumbing", "Connects flow points"],
    },
    Category {
        name: "flat_areas",
        words: &["plain"],
        kind: "This is flat land",
        contexts: &["A level area", "Flat ground", "Open space"],
    },
    Category {
        name: "organization_schemes",
        words: &["plan"],
        kind: "This is about organizing future actions",
        contexts: &["Helps prepare", "Organizes actions", "About future events"],
    },
    Category {
        name: "growing_things",
        words: &["plant"],
        kind: "This grows from the ground",
        contexts: &["Needs soil and water", "Growing thing", "Found in gardens"],
    },
    Category {
        name: "competitions_rewards",
        words: &["prize"],
        kind: "This is a reward",
        contexts: &["Given for winning", "A special award", "Recognition for success"],
    },
    Category {
        name: "cleanliness_quality",
        words: &["pure"],
        kind: "This means clean or perfect",
        contexts: &["Without mixture", "Completely clean", "Perfect state"],
    },
    Category {
        name: "earth_movement",
        words: &["quake"],
        kind: "This shakes the ground",
        contexts: &["Earth movement", "Natural disaster", "Ground shaking"],
    },
    Category {
        name: "royalty_power",
        words: &["queen"],
        kind: "This is royalty",
        contexts: &["Rules a kingdom", "Royal person", "Has great power"],
    },
    Category {
        name: "adventure_seeking",
        words: &["quest"],
        kind: "This is a search or mission",
        contexts: &["An important mission", "Searching for something", "Adventure journey"],
    },
    Category {
        name: "movement_quickness",
        words: &["quick"],
        kind: "This is about being fast",
        contexts: &["Not slow", "Happens rapidly", "Fast movement"],
    },
    Category {
        name: "sound_volume",
        words: &["quiet"],
        kind: "This is about sound level",
        contexts: &["Lack of noise", "Peaceful sound", "Not loud"],
    },
    Category {
        name: "competition_speed",
        words: &["race"],
        kind: "This is about competing",
        contexts: &["Moving fast", "Competition event", "Testing speed"],
    },
    Category {
        name: "boat_water",
        words: &["sail", "ship", "boat"],
        kind: "This relates to water travel",
        contexts: &["Used on water", "For ocean travel", "Moves across water"],
    },
    Category {
        name: "seasoning_taste",
        words: &["salt"],
        kind: "This adds flavor",
        contexts: &["Used in cooking", "Makes food taste better", "Common seasoning"],
    },
    Category {
        name: "beach_ground",
        words: &["sand", "clay"],
        kind: "This is loose ground material",
        contexts: &["Found on beaches", "Made of tiny grains", "Loose natural material"],
    },
    Category {
        name: "measurement_comparison",
        words: &["scale", "size"],
        kind: "This relates to measuring",
        contexts: &["Used to measure things", "Shows how big something is", "Compares sizes"],
    },
    Category {
        name: "sharp_cutting",
        words: &["sharp"],
        kind: "This describes an edge",
        contexts: &["Can cut things", "Not dull", "Has a fine edge"],
    },
    Category {
        name: "covering_protection",
        words: &["sheet", "shield", "skin"],
        kind: "This covers or protects",
        contexts: &["Provides protection", "Covers something else", "Outer layer"],
    },
    Category {
        name: "water_edges",
        words: &["shore", "coast"],
        kind: "This is where water meets land",
        contexts: &["Edge of water", "By the ocean", "Where land meets sea"],
    },
    Category {
        name: "clothing_wear",
        words: &["shirt"],
        kind: "This is clothing",
        contexts: &["Something to wear", "Covers your body", "Part of clothing"],
    },
    Category {
        name: "heavens_space",
        words: &["sky", "star", "sun", "space", "moon", "comet"],
        kind: "This is above us",
        contexts: &["Look up to see this", "Part of the universe", "In the heavens"],
    },
    Category {
        name: "rest_unconscious",
        words: &["sleep"],
        kind: "This is rest time",
        contexts: &["Everyone needs this", "Done at night", "For resting"],
    },
    Category {
        name: "expressions_faces",
        words: &["smile"],
        kind: "This is a facial expression",
        contexts: &["Shows on your face", "Shows happiness", "Expression of joy"],
    },
    Category {
        name: "weather_elements",
        words: &["smoke", "snow", "storm", "rain", "cloud", "mist", "fog", "frost"],
        kind: "This is a weather or air condition",
        contexts: &["You can see this in the air", "Weather related", "Natural phenomenon"],
    },
    Category {
        name: "cleaning_hygiene",
        words: &["soap"],
        kind: "This is for cleaning",
        contexts: &["Used to clean things", "Makes things clean", "Used with water"],
    },
    Category {
        name: "ground_material",
        words: &["soil"],
        kind: "This is ground material",
        contexts: &["Plants grow in this", "Part of the earth", "Natural ground"],
    },
    Category {
        name: "hearing_sound",
        words: &["song", "sound"],
        kind: "This relates to hearing",
        contexts: &["You can hear this", "Makes noise", "Audio related"],
    },
    Category {
        name: "food_liquid",
        words: &["soup"],
        kind: "This is liquid food",
        contexts: &["You eat this hot", "Liquid meal", "Made in a pot"],
    },
    Category {
        name: "energy_power",
        words: &["spark"],
        kind: "This is a flash of energy",
        contexts: &["Quick flash", "Small light", "Brief energy"],
    },
    Category {
        name: "magic_supernatural",
        words: &["spell"],
        kind: "This is magical",
        contexts: &["Used in magic", "Supernatural power", "Magical effect"],
    },
    Category {
        name: "movement_energy",
        words: &["swift", "swing", "glide", "drift", "float", "hover"],
        kind: "This is about movement",
        contexts: &["Way of moving", "About motion", "Moving action"],
    },
    Category {
        name: "weapons_combat",
        words: &["sword"],
        kind: "This is a weapon",
        contexts: &["Used in fighting", "Historical weapon", "Combat tool"],
    },
    Category {
        name: "furniture_household",
        words: &["table"],
        kind: "This is household furniture",
        contexts: &["Found in homes", "Furniture piece", "Used daily"],
    },
    Category {
        name: "stories_narratives",
        words: &["tale"],
        kind: "This is a story",
        contexts: &["Type of story", "Tells events", "Narrative form"],
    },
    Category {
        name: "temporary_shelter",
        words: &["tent"],
        kind: "This is temporary shelter",
        contexts: &["Used for camping", "Portable shelter", "Temporary home"],
    },
    Category {
        name: "royal_symbols",
        words: &["throne"],
        kind: "This relates to royalty",
        contexts: &["Used by kings/queens", "Symbol of power", "Royal furniture"],
    },
    Category {
        name: "time_cycles",
        words: &["time"],
        kind: "This measures life's progress",
        contexts: &["Always moving forward", "Measures duration", "Never stops"],
    },
    Category {
        name: "wild_animals",
        words: &["tiger", "wolf", "eagle", "cobra"],
        kind: "This is a wild predator",
        contexts: &["Dangerous animal", "Wild hunter", "Powerful creature"],
    },
    Category {
        name: "growing_trees",
        words: &["tree"],
        kind: "This grows from the ground",
        contexts: &["Has leaves and branches", "Grows tall", "Found in forests"],
    },
    Category {
        name: "groups_people",
        words: &["tribe", "troop"],
        kind: "This is a group of people",
        contexts: &["People together", "Organized group", "Social unit"],
    },
    Category {
        name: "vehicles_transport",
        words: &["truck"],
        kind: "This is for transportation",
        contexts: &["Moves things", "Road vehicle", "For carrying cargo"],
    },
    Category {
        name: "musical_tunes",
        words: &["tune"],
        kind: "This is musical",
        contexts: &["Part of music", "Musical sound", "Pleasant notes"],
    },
    Category {
        name: "togetherness_harmony",
        words: &["unity"],
        kind: "This means joined together",
        contexts: &["Being combined", "Working together", "Becoming one"],
    },
    Category {
        name: "city_development",
        words: &["urban"],
        kind: "This relates to cities",
        contexts: &["About city life", "Not rural", "City related"],
    },
    Category {
        name: "barriers_construction",
        words: &["wall"],
        kind: "This blocks or divides",
        contexts: &["Vertical structure", "Divides spaces", "Part of buildings"],
    },
    Category {
        name: "liquid_flow",
        words: &["water", "wave", "tide"],
        kind: "This relates to liquid movement",
        contexts: &["Moves like liquid", "Found in oceans", "Flowing motion"],
    },
    Category {
        name: "grain_farming",
        words: &["wheat"],
        kind: "This is a crop",
        contexts: &["Grown on farms", "Makes flour", "Food grain"],
    },
    Category {
        name: "air_movement",
        words: &["wind", "wing"],
        kind: "This relates to air and movement",
        contexts: &["Moves through air", "Related to flying", "Air movement"],
    },
    Category {
        name: "intelligence_knowledge",
        words: &["wise", "word"],
        kind: "This relates to knowledge",
        contexts: &["About understanding", "Shows knowledge", "Communication tool"],
    },
    Category {
        name: "materials_construction",
        words: &["wood"],
        kind: "This is building material",
        contexts: &["From trees", "Used in building", "Natural material"],
    },
    Category {
        name: "earth_planet",
        words: &["world"],
        kind: "This is where we live",
        contexts: &["The whole planet", "Everything around us", "Earth and life"],
    },
    Category {
        name: "measurement_space",
        words: &["yard"],
        kind: "This measures or contains",
        contexts: &["Space measurement", "Outside area", "Distance unit"],
    },
    Category {
        name: "time_annual",
        words: &["year"],
        kind: "This is a time period",
        contexts: &["Long time measure", "Calendar unit", "Twelve months"],
    },
    Category {
        name: "growth_production",
        words: &["yield"],
        kind: "This is about producing",
        contexts: &["Giving results", "Producing something", "Output amount"],
    },
    Category {
        name: "age_development",
        words: &["young"],
        kind: "This relates to age",
        contexts: &["About age", "Early in life", "Not old"],
    },
    Category {
        name: "areas_regions",
        words: &["zone"],
        kind: "This is a defined area",
        contexts: &["Specific area", "Marked region", "Defined space"],
    },
];

/// Category for `word`, first match in table order.
pub fn category_of(word: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.words.contains(&word))
}

/// "<kind>. <context>" for a known word; the context is picked from the
/// word's letters so a word always gets the same sentence.
pub fn describe(word: &str) -> String {
    match category_of(word) {
        Some(category) if !category.contexts.is_empty() => {
            let pick = word.bytes().map(usize::from).sum::<usize>() % category.contexts.len();
            format!("{}. {}", category.kind, category.contexts[pick])
        }
        Some(category) => category.kind.to_string(),
        None => GENERIC_DESCRIPTION.to_string(),
    }
}

//! Built-in catalogs as (category, text, name) rows.

pub const KAOMOJI: &[(&str, &str, &str)] = &[
    ("Happy", "(^_^)", "Smile"),
    ("Happy", "(◕‿◕)", "Happy"),
    ("Happy", "(｡◕‿◕｡)", "Cute happy"),
    ("Happy", "(≧◡≦)", "Excited"),
    ("Happy", "(*^▽^*)", "Joyful"),
    ("Happy", "٩(◕‿◕｡)۶", "Celebration"),
    ("Happy", "(ﾉ◕ヮ◕)ﾉ*:・ﾟ✧", "Sparkle"),
    ("Happy", "(○´∀`○)", "Cheerful"),
    ("Sad", "(T_T)", "Crying"),
    ("Sad", "(╥﹏╥)", "Sobbing"),
    ("Sad", "(´;ω;`)", "Teary"),
    ("Sad", "(っ˘̩╭╮˘̩)っ", "Sulking"),
    ("Angry", "(╯°□°）╯︵ ┻━┻", "Table flip"),
    ("Angry", "(ノಠ益ಠ)ノ彡┻━┻", "Angry flip"),
    ("Angry", "(ಠ_ಠ)", "Disapproval"),
    ("Angry", "(╬ Ò﹏Ó)", "Very angry"),
    ("Angry", "┬─┬ノ( º _ ºノ)", "Put table back"),
    ("Love", "(づ￣ ³￣)づ", "Kiss"),
    ("Love", "( ˘ ³˘)♥", "Love"),
    ("Love", "(づ｡◕‿‿◕｡)づ", "Hug"),
    ("Love", "(♡˙︶˙♡)", "Heart eyes"),
    ("Animals", "ʕ•ᴥ•ʔ", "Bear"),
    ("Animals", "(=^･ω･^=)", "Cat"),
    ("Animals", "U・ᴥ・U", "Dog"),
    ("Animals", "(・⊝・)", "Bird"),
    ("Greeting", "( ´ ▽ ` )ノ", "Wave"),
    ("Greeting", "(ノ´ー`)ノ", "Cool wave"),
    ("Greeting", "(・ω・)ノ", "Hi"),
    ("Other", "¯\\_(ツ)_/¯", "Shrug"),
    ("Other", "( ͡° ͜ʖ ͡°)", "Lenny"),
    ("Other", "(☞ﾟヮﾟ)☞", "Pointing"),
    ("Other", "(´･ω･`)?", "Confused"),
    ("Other", "(っ˘ω˘ς )", "Sleepy"),
    ("Other", "ε=ε=ε=┏(゜ロ゜;)┛", "Running"),
    ("Other", "(ง'̀-'́)ง", "Fighting"),
];

pub const SYMBOLS: &[(&str, &str, &str)] = &[
    ("Arrows", "→", "Right arrow"),
    ("Arrows", "←", "Left arrow"),
    ("Arrows", "↑", "Up arrow"),
    ("Arrows", "↓", "Down arrow"),
    ("Arrows", "↔", "Left right arrow"),
    ("Arrows", "⇒", "Double right arrow"),
    ("Arrows", "⇔", "Double left right arrow"),
    ("Arrows", "↩", "Return arrow"),
    ("Math", "±", "Plus minus"),
    ("Math", "×", "Multiplication"),
    ("Math", "÷", "Division"),
    ("Math", "≠", "Not equal"),
    ("Math", "≈", "Almost equal"),
    ("Math", "≤", "Less than or equal"),
    ("Math", "≥", "Greater than or equal"),
    ("Math", "∞", "Infinity"),
    ("Math", "√", "Square root"),
    ("Math", "∑", "Summation"),
    ("Math", "π", "Pi"),
    ("Math", "°", "Degree"),
    ("Currency", "€", "Euro"),
    ("Currency", "£", "Pound"),
    ("Currency", "¥", "Yen"),
    ("Currency", "₩", "Won"),
    ("Currency", "₹", "Rupee"),
    ("Currency", "₿", "Bitcoin"),
    ("Shapes", "■", "Black square"),
    ("Shapes", "□", "White square"),
    ("Shapes", "●", "Black circle"),
    ("Shapes", "○", "White circle"),
    ("Shapes", "▲", "Black triangle"),
    ("Shapes", "◆", "Black diamond"),
    ("Punctuation", "…", "Ellipsis"),
    ("Punctuation", "—", "Em dash"),
    ("Punctuation", "–", "En dash"),
    ("Punctuation", "«", "Left guillemet"),
    ("Punctuation", "»", "Right guillemet"),
    ("Punctuation", "§", "Section"),
    ("Punctuation", "¶", "Pilcrow"),
    ("Punctuation", "©", "Copyright"),
    ("Punctuation", "®", "Registered"),
    ("Punctuation", "™", "Trademark"),
    ("Stars", "★", "Black star"),
    ("Stars", "☆", "White star"),
    ("Stars", "✦", "Four pointed star"),
    ("Stars", "✧", "White four pointed star"),
    ("Stars", "✩", "Stress outlined star"),
    ("Stars", "❄", "Snowflake"),
];

//! Built-in stopword inventories, lowercased and NFKC-normalized.

// English
const STOPWORDS_EN: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "was", "were", "been", "has", "had", "are", "is", "am", "can", "could", "did", "does",
    "doing", "done", "what", "which", "who", "whom", "when", "where", "why", "how", "up", "out",
    "if", "about", "than", "into", "so", "me", "your", "yours", "our", "ours", "its", "itself",
    "themselves", "him", "himself", "hers", "herself", "them", "these", "those", "here",
    "because", "over", "under", "again", "further", "then", "once", "only", "just", "also",
    "even", "ever", "never", "very",
];

// German
const STOPWORDS_DE: &[&str] = &[
    "der", "die", "das", "und", "in", "den", "von", "zu", "mit", "sich", "des", "im", "auf",
    "für", "ist", "dem", "nicht", "ein", "eine", "als", "auch", "es", "an", "werden", "aus",
    "er", "hat", "dass", "so", "was", "wir", "bei", "oder", "aber", "wenn", "noch", "nur",
    "schon", "wie", "man", "am", "nach", "mehr", "über", "bis", "vor", "durch", "ohne",
    "zwischen", "sein", "seine", "seiner", "ihr", "ihre", "ihrer", "du", "ich", "euch", "uns",
    "einer", "einem", "einen",
];

// French
const STOPWORDS_FR: &[&str] = &[
    "le", "la", "les", "de", "des", "du", "un", "une", "et", "en", "dans", "que", "qui", "pour",
    "sur", "pas", "plus", "avec", "ne", "au", "aux", "se", "ce", "cet", "cette", "ces", "il",
    "elle", "ils", "elles", "nous", "vous", "on", "par", "comme", "mais", "ou", "où", "donc",
    "ni", "car", "été", "etre", "être", "avoir",
];

// Spanish
const STOPWORDS_ES: &[&str] = &[
    "el", "la", "los", "las", "de", "del", "un", "una", "unos", "unas", "y", "en", "que", "por",
    "con", "para", "como", "más", "muy", "no", "sí", "se", "su", "sus", "al", "lo", "le", "les",
    "o", "u", "ya", "entre", "cuando", "donde", "dónde", "porque", "sobre", "también",
];

// Italian
const STOPWORDS_IT: &[&str] = &[
    "il", "lo", "la", "i", "gli", "le", "un", "una", "uno", "di", "a", "da", "in", "con", "su",
    "per", "tra", "fra", "che", "chi", "come", "quale", "quanto", "non", "più", "meno", "sì",
    "no", "noi", "voi", "lui", "lei", "loro", "cui", "anche", "già", "solo", "ancora",
];

// Portuguese
const STOPWORDS_PT: &[&str] = &[
    "o", "a", "os", "as", "um", "uma", "uns", "umas", "de", "do", "da", "dos", "das", "em",
    "no", "na", "nos", "nas", "e", "que", "por", "com", "para", "como", "mais", "muito", "não",
    "sim", "se", "sua", "seu", "suas", "seus", "ao", "aos", "à", "às", "já", "entre", "quando",
    "onde", "também",
];

// Dutch
const STOPWORDS_NL: &[&str] = &[
    "de", "het", "een", "en", "van", "op", "te", "dat", "die", "in", "met", "niet", "voor",
    "als", "bij", "om", "aan", "je", "jij", "wij", "we", "zij", "ze", "hun", "hen", "maar",
    "ook", "al", "nog",
];

// Swedish
const STOPWORDS_SV: &[&str] = &[
    "och", "det", "att", "i", "en", "jag", "hon", "som", "han", "på", "den", "med", "var",
    "sig", "för", "så", "till", "är", "de", "inte", "om", "ett", "men", "här", "där", "har",
    "ha", "vi", "ni", "er", "oss",
];

// Danish
const STOPWORDS_DA: &[&str] = &[
    "og", "i", "jeg", "det", "at", "en", "den", "til", "er", "som", "på", "de", "med", "han",
    "af", "for", "ikke", "der", "var", "mig", "sig", "men", "et", "har", "om", "vi", "min",
    "havde", "hun", "nu", "over", "da",
];

// Norwegian
const STOPWORDS_NO: &[&str] = &[
    "og", "i", "jeg", "det", "at", "en", "den", "til", "er", "som", "på", "de", "med", "han",
    "av", "for", "ikke", "der", "var", "meg", "seg", "men", "et", "har", "om", "vi", "min",
    "hadde", "hun", "nå", "over", "da",
];

// Finnish
const STOPWORDS_FI: &[&str] = &[
    "ja", "on", "se", "että", "ei", "kuin", "oli", "mutta", "jos", "mitä", "kun", "niin",
    "kanssa", "tai", "vain", "myös", "jo", "muun", "me", "te", "he", "hän", "ne", "nämä", "tuo",
    "tämä",
];

// Russian
const STOPWORDS_RU: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "ее", "мне", "есть",
    "они", "только", "мы", "быть", "был", "когда", "еще", "до", "из", "ему", "теперь", "при",
    "ли", "если", "уже", "или", "ни", "были",
];

// Polish
const STOPWORDS_PL: &[&str] = &[
    "i", "w", "na", "to", "że", "z", "do", "się", "nie", "jest", "jak", "ale", "o", "po", "co",
    "za", "od", "tak", "dla", "tego", "ten", "ta", "tam", "tu", "być", "był", "była", "było",
    "już",
];

// Czech
const STOPWORDS_CS: &[&str] = &[
    "a", "i", "v", "ve", "na", "že", "se", "si", "je", "já", "ty", "on", "ona", "ono", "my",
    "vy", "oni", "ale", "ne", "co", "jak", "k", "do", "za", "po", "u", "od", "pro", "bez", "už",
];

// Turkish
const STOPWORDS_TR: &[&str] = &[
    "ve", "bir", "bu", "da", "de", "için", "ile", "ama", "fakat", "çok", "az", "daha", "en",
    "mi", "mu", "mü", "ne", "niçin", "neden", "çünkü", "gibi", "kadar", "ise", "ya", "ya da",
    "veya", "şu", "o", "şöyle",
];

// Greek
const STOPWORDS_EL: &[&str] = &[
    "και", "το", "η", "να", "του", "την", "τι", "σε", "με", "από", "που", "για", "ως", "πως",
    "πολύ", "ότι", "είναι", "ή", "θα", "αν", "δε", "δεν", "ενα", "μια", "στο", "στη", "στους",
    "στις",
];

// Arabic
const STOPWORDS_AR: &[&str] = &[
    "و", "في", "على", "من", "إلى", "عن", "أن", "إن", "كان", "تكون", "التي", "الذي", "هذا",
    "هذه", "ذلك", "تلك", "ما", "لا", "لم", "لن", "مع", "كل", "كما", "بعد", "قبل", "دون", "حيث",
    "قد", "أي", "أو",
];

// Persian
const STOPWORDS_FA: &[&str] = &[
    "و", "در", "به", "از", "که", "این", "را", "با", "برای", "آن", "بود", "است", "می", "تا",
    "اما", "یا", "نه", "اگر", "هم", "همه", "هیچ", "چون", "چرا", "کجا", "چه", "کی",
];

// Hebrew
const STOPWORDS_HE: &[&str] = &[
    "של", "על", "עם", "אל", "אלו", "אלה", "זה", "זאת", "לא", "כן", "אם", "או", "כי", "הוא",
    "היא", "הם", "הן", "אני", "אנחנו", "אתה", "את", "אתם", "אתן", "גם", "עוד", "כמו", "אבל",
];

// Hindi
const STOPWORDS_HI: &[&str] = &[
    "और", "के", "का", "की", "को", "पर", "से", "है", "थे", "था", "यह", "ये", "वह", "वे", "एक",
    "में", "तथा", "जैसे", "लिए", "ताकि", "किया", "करना", "हैं", "या", "भी",
];

// Urdu
const STOPWORDS_UR: &[&str] = &[
    "اور", "کے", "کا", "کی", "کو", "پر", "سے", "ہے", "تھا", "تھے", "یہ", "وہ", "ایک", "میں",
    "لیے", "جیسے", "بھی", "یا", "ہیں", "تاکہ", "کرنا", "کیا",
];

// Bengali
const STOPWORDS_BN: &[&str] = &[
    "এবং", "এর", "একটি", "এই", "ও", "করে", "করা", "কী", "কি", "কে", "সে", "তা", "তাই", "না",
    "হয়", "হয়ে", "হলে", "যে", "যদি", "যখন", "যেখানে", "আর", "কেন", "কোন", "কোনও",
];

// Indonesian
const STOPWORDS_ID: &[&str] = &[
    "yang", "dan", "di", "ke", "dari", "untuk", "pada", "dengan", "tidak", "ini", "itu",
    "adalah", "atau", "sebagai", "oleh", "para", "saja", "karena", "agar", "kami", "kita",
    "mereka", "ada", "akan",
];

// Malay
const STOPWORDS_MS: &[&str] = &[
    "yang", "dan", "di", "ke", "dari", "untuk", "pada", "dengan", "tidak", "ini", "itu",
    "adalah", "atau", "sebagai", "oleh", "para", "saja", "kerana", "agar", "kami", "kita",
    "mereka", "ada", "akan",
];

// Vietnamese
const STOPWORDS_VI: &[&str] = &[
    "và", "của", "là", "trong", "một", "những", "các", "được", "cho", "với", "không", "có",
    "đã", "đang", "từ", "này", "kia", "đó", "khi", "ở", "như", "nhưng", "hoặc",
];

// Thai
const STOPWORDS_TH: &[&str] = &[
    "และ", "ของ", "คือ", "ใน", "ที่", "เป็น", "ได้", "ให้", "ไม่", "มี", "หรือ", "กับ", "จาก",
    "ว่า", "ซึ่ง", "นี้", "นั้น", "ก็", "แล้ว", "เมื่อ", "โดย",
];

// Romanian
const STOPWORDS_RO: &[&str] = &[
    "și", "în", "pe", "la", "cu", "de", "din", "un", "o", "este", "sunt", "nu", "da", "sau",
    "care", "că", "pentru", "mai", "foarte", "cum", "ce", "când", "unde", "fără",
];

// Hungarian
const STOPWORDS_HU: &[&str] = &[
    "és", "a", "az", "hogy", "nem", "van", "volt", "egy", "én", "te", "ő", "mi", "ti", "ők",
    "de", "mert", "mint", "is", "vagy", "vagyok", "le", "fel", "be", "ki", "itt", "ott",
];

// Slovak
const STOPWORDS_SK: &[&str] = &[
    "a", "i", "v", "vo", "na", "že", "sa", "si", "je", "ja", "ty", "on", "ona", "ono", "my",
    "vy", "oni", "ale", "nie", "čo", "ako", "k", "do", "za", "po", "u", "od", "pre", "bez",
    "už",
];

// Slovenian
const STOPWORDS_SL: &[&str] = &[
    "in", "da", "je", "se", "na", "v", "za", "z", "s", "ki", "kaj", "kdo", "kot", "ali", "ne",
    "ja", "že", "tudi", "pri", "po", "iz", "ob",
];

// Chinese
const STOPWORDS_ZH: &[&str] = &[
    "的", "了", "在", "是", "不", "有", "我", "他", "你", "们", "这", "那", "为", "上", "个", "到", "说", "和",
    "地", "就", "出", "也", "可", "要", "以", "会", "而", "及", "与", "著", "着", "之",
];

// Japanese
const STOPWORDS_JA: &[&str] = &[
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "ます", "です", "する", "いる", "ある", "なる", "この",
    "その", "あの", "もの", "こと", "よう", "ため", "から", "まで", "そして", "また",
];

// Korean
const STOPWORDS_KO: &[&str] = &[
    "이", "그", "저", "것", "수", "등", "들", "및", "그리고", "또는", "하지만", "그러나", "때문에", "위해", "통해", "의",
    "가", "을", "를", "에", "에서", "로", "으로", "와", "과", "도", "만", "까지", "부터", "에게", "께", "보다", "처럼",
    "또", "또한", "혹은", "그래서", "하면", "혹시", "이미", "아주", "매우", "너무", "좀", "또다시", "다시", "만큼", "마다",
];

/// Canonical language code to base inventory.
pub(crate) static INVENTORIES: &[(&str, &[&str])] = &[
    ("en", STOPWORDS_EN),
    ("de", STOPWORDS_DE),
    ("fr", STOPWORDS_FR),
    ("es", STOPWORDS_ES),
    ("it", STOPWORDS_IT),
    ("pt", STOPWORDS_PT),
    ("nl", STOPWORDS_NL),
    ("sv", STOPWORDS_SV),
    ("da", STOPWORDS_DA),
    ("no", STOPWORDS_NO),
    ("fi", STOPWORDS_FI),
    ("ru", STOPWORDS_RU),
    ("pl", STOPWORDS_PL),
    ("cs", STOPWORDS_CS),
    ("tr", STOPWORDS_TR),
    ("el", STOPWORDS_EL),
    ("ar", STOPWORDS_AR),
    ("fa", STOPWORDS_FA),
    ("he", STOPWORDS_HE),
    ("hi", STOPWORDS_HI),
    ("ur", STOPWORDS_UR),
    ("bn", STOPWORDS_BN),
    ("id", STOPWORDS_ID),
    ("ms", STOPWORDS_MS),
    ("vi", STOPWORDS_VI),
    ("th", STOPWORDS_TH),
    ("ro", STOPWORDS_RO),
    ("hu", STOPWORDS_HU),
    ("sk", STOPWORDS_SK),
    ("sl", STOPWORDS_SL),
    ("zh", STOPWORDS_ZH),
    ("ja", STOPWORDS_JA),
    ("ko", STOPWORDS_KO),
];

//! Compiled-in keyword tables for topic classification
//!
//! One domain table and one deny table per supported language. Domain terms
//! cover the migrant-worker-rights vocabulary (wages, permits, leave, housing,
//! safety, enforcement). Deny terms force rejection regardless of domain
//! matches.

/// English in-domain terms
pub const DOMAIN_EN: &[&str] = &[
    "wage", "wages", "salary", "pay", "payment", "paid", "unpaid", "payslip", "salary slip",
    "minimum wage", "basic pay", "allowance", "bonus", "increment", "deduction", "deductions",
    "overtime", "ot pay", "double pay", "triple pay", "rest day pay", "holiday pay",
    "working hours", "work hours", "shift", "night shift", "rest day", "day off", "break time",
    "leave", "annual leave", "sick leave", "medical leave", "maternity leave", "paternity leave",
    "emergency leave", "unpaid leave", "public holiday", "holiday",
    "contract", "employment contract", "agreement", "probation", "notice period", "notice",
    "termination", "terminated", "dismissal", "dismissed", "fired", "retrenchment", "resign",
    "resignation", "transfer employer", "change employer",
    "employer", "boss", "supervisor", "company", "agent", "agency", "recruitment", "recruiter",
    "outsourcing", "contractor", "subcontractor",
    "passport", "passport retention", "keep passport", "hold passport", "work permit", "permit",
    "visa", "visit pass", "temporary employment pass", "plks", "levy", "cos", "calling visa",
    "immigration", "imigresen", "deportation", "deported", "detention", "detained", "raid",
    "arrest", "arrested", "overstay", "undocumented", "illegal worker", "amnesty",
    "fomema", "medical check", "medical checkup", "health screening",
    "socso", "perkeso", "epf", "kwsp", "insurance", "compensation", "injury", "injured",
    "accident", "workplace accident", "disability", "death benefit",
    "safety", "safety equipment", "helmet", "gloves", "protective", "hazard", "chemical",
    "heat", "fall", "machinery",
    "hostel", "housing", "accommodation", "dormitory", "quarters", "rent", "crowded",
    "electricity", "water supply", "act 446",
    "food", "meal", "canteen",
    "clinic", "hospital", "doctor", "treatment", "medical cost", "medicine", "panel clinic",
    "abuse", "abused", "beaten", "harassment", "sexual harassment", "threat", "threatened",
    "forced labour", "forced labor", "trafficking", "trafficked", "bonded labour", "debt bondage",
    "exploitation", "confiscate", "confiscated",
    "complaint", "complain", "report", "labour office", "labour department", "labor department",
    "jtk", "jabatan tenaga kerja", "industrial court", "labour court", "tribunal", "legal aid",
    "lawyer", "embassy", "consulate", "ngo", "helpline", "hotline", "police report",
    "rights", "worker rights", "employee rights", "employment act", "employment law", "labour law",
    "act 265", "minimum wages order",
    "domestic worker", "maid", "plantation", "factory", "construction", "security guard",
    "cleaner", "restaurant worker", "foreign worker", "migrant worker", "pekerja asing",
    "remittance", "send money", "bank account", "atm card",
];

/// Malay in-domain terms
pub const DOMAIN_MS: &[&str] = &[
    "gaji", "upah", "bayaran", "bayar", "gaji minimum", "gaji pokok", "elaun", "bonus",
    "kenaikan gaji", "potongan", "potongan gaji", "slip gaji", "gaji tertunggak",
    "kerja lebih masa", "lebih masa", "kadar lebih masa", "bayaran cuti",
    "waktu kerja", "masa kerja", "syif", "syif malam", "hari rehat", "cuti rehat", "rehat",
    "cuti", "cuti tahunan", "cuti sakit", "cuti bersalin", "cuti kecemasan", "cuti umum",
    "cuti tanpa gaji", "hari kelepasan am",
    "kontrak", "kontrak kerja", "perjanjian", "tempoh percubaan", "notis", "tempoh notis",
    "penamatan", "buang kerja", "dipecat", "diberhentikan", "berhenti kerja", "letak jawatan",
    "tukar majikan",
    "majikan", "penyelia", "syarikat", "ejen", "agensi", "pengambilan pekerja", "kontraktor",
    "pasport", "simpan pasport", "tahan pasport", "permit kerja", "permit", "visa", "pas lawatan",
    "pas penggajian sementara", "plks", "levi",
    "imigresen", "deportasi", "dihantar pulang", "tahanan", "ditahan", "serbuan", "tangkap",
    "ditangkap", "tinggal lebih masa", "pekerja tanpa izin", "pengampunan",
    "fomema", "pemeriksaan kesihatan", "saringan kesihatan",
    "perkeso", "socso", "kwsp", "epf", "insurans", "pampasan", "kecederaan", "cedera",
    "kemalangan", "kemalangan kerja", "hilang upaya", "faedah kematian",
    "keselamatan", "peralatan keselamatan", "topi keledar", "sarung tangan", "bahaya", "kimia",
    "asrama", "penginapan", "perumahan", "rumah pekerja", "sewa", "sesak", "elektrik",
    "bekalan air", "akta 446",
    "makanan", "makan", "kantin",
    "klinik", "hospital", "doktor", "rawatan", "kos perubatan", "ubat", "klinik panel",
    "penderaan", "didera", "dipukul", "gangguan", "gangguan seksual", "ugutan", "diugut",
    "buruh paksa", "pemerdagangan orang", "perhambaan hutang", "eksploitasi", "dirampas",
    "aduan", "mengadu", "lapor", "pejabat buruh", "jabatan tenaga kerja", "jtk",
    "mahkamah perusahaan", "mahkamah buruh", "tribunal", "bantuan guaman", "peguam",
    "kedutaan", "konsulat", "talian bantuan", "laporan polis",
    "hak", "hak pekerja", "akta kerja", "akta pekerjaan", "undang-undang buruh", "akta 265",
    "perintah gaji minimum",
    "pembantu rumah", "amah", "ladang", "kilang", "pembinaan", "pengawal keselamatan",
    "pencuci", "pekerja asing", "pekerja migran",
    "kirim wang", "hantar duit", "akaun bank", "kad atm",
];

/// Nepali in-domain terms
pub const DOMAIN_NE: &[&str] = &[
    "तलब", "ज्याला", "पारिश्रमिक", "भुक्तानी", "न्यूनतम ज्याला", "न्यूनतम तलब", "आधारभूत तलब",
    "भत्ता", "बोनस", "कटौती", "तलब कटौती", "तलब पर्ची", "बाँकी तलब", "तलब नपाएको",
    "ओभरटाइम", "अतिरिक्त समय", "ओभरटाइम दर",
    "काम गर्ने समय", "कामको समय", "सिफ्ट", "रात्रि सिफ्ट", "आराम दिन", "बिदाको दिन", "विश्राम",
    "बिदा", "वार्षिक बिदा", "बिरामी बिदा", "प्रसूति बिदा", "आकस्मिक बिदा", "सार्वजनिक बिदा",
    "करार", "रोजगार करार", "सम्झौता", "परीक्षण अवधि", "सूचना अवधि",
    "बर्खास्त", "निकालियो", "कामबाट निकाल्ने", "राजीनामा", "रोजगारदाता परिवर्तन",
    "रोजगारदाता", "मालिक", "सुपरभाइजर", "कम्पनी", "एजेन्ट", "एजेन्सी", "भर्ती", "म्यानपावर",
    "राहदानी", "पासपोर्ट", "पासपोर्ट जफत", "पासपोर्ट राख्ने", "कार्य अनुमति", "परमिट", "भिसा",
    "लेभी",
    "अध्यागमन", "निर्वासन", "फिर्ता पठाउने", "हिरासत", "थुना", "छापा", "गिरफ्तार", "पक्राउ",
    "अवैध कामदार", "कागजात नभएको",
    "फोमेमा", "स्वास्थ्य परीक्षण", "मेडिकल जाँच",
    "सोक्सो", "पर्केसो", "बीमा", "क्षतिपूर्ति", "चोटपटक", "घाइते", "दुर्घटना", "कार्यस्थल दुर्घटना",
    "अपाङ्गता", "मृत्यु सुविधा",
    "सुरक्षा", "सुरक्षा उपकरण", "हेलमेट", "पन्जा", "खतरा", "रसायन",
    "होस्टल", "आवास", "बासस्थान", "डर्मिटरी", "कोठा", "भाडा", "भीडभाड", "बिजुली", "पानी",
    "खाना", "भोजन", "क्यान्टिन",
    "क्लिनिक", "अस्पताल", "डाक्टर", "उपचार", "उपचार खर्च", "औषधि",
    "दुर्व्यवहार", "कुटपिट", "पिटाइ", "उत्पीडन", "यौन उत्पीडन", "धम्की",
    "जबरजस्ती श्रम", "बाध्य श्रम", "मानव बेचबिखन", "ऋण बन्धन", "शोषण", "जफत",
    "उजुरी", "गुनासो", "रिपोर्ट", "श्रम कार्यालय", "श्रम विभाग", "श्रम अदालत", "अदालत",
    "कानूनी सहायता", "वकिल", "दूतावास", "हटलाइन", "प्रहरी",
    "अधिकार", "कामदारको अधिकार", "श्रम कानून", "रोजगार ऐन",
    "घरेलु कामदार", "बगान", "कारखाना", "निर्माण", "सुरक्षा गार्ड", "सफाइ कर्मचारी",
    "विदेशी कामदार", "आप्रवासी कामदार",
    "रेमिट्यान्स", "पैसा पठाउने", "बैंक खाता",
];

/// Hindi in-domain terms
pub const DOMAIN_HI: &[&str] = &[
    "वेतन", "तनख्वाह", "मजदूरी", "भुगतान", "न्यूनतम वेतन", "न्यूनतम मजदूरी", "मूल वेतन",
    "भत्ता", "बोनस", "कटौती", "वेतन कटौती", "वेतन पर्ची", "बकाया वेतन", "वेतन नहीं मिला",
    "ओवरटाइम", "अतिरिक्त समय", "ओवरटाइम दर",
    "काम के घंटे", "कार्य समय", "शिफ्ट", "रात की शिफ्ट", "आराम का दिन", "साप्ताहिक छुट्टी",
    "छुट्टी", "वार्षिक छुट्टी", "बीमारी की छुट्टी", "मातृत्व अवकाश", "आपातकालीन छुट्टी",
    "सार्वजनिक अवकाश",
    "अनुबंध", "रोजगार अनुबंध", "समझौता", "परिवीक्षा", "नोटिस अवधि",
    "बर्खास्त", "निकाल दिया", "नौकरी से निकालना", "इस्तीफा", "नियोक्ता बदलना",
    "नियोक्ता", "मालिक", "सुपरवाइजर", "कंपनी", "एजेंट", "एजेंसी", "भर्ती",
    "पासपोर्ट", "पासपोर्ट जब्त", "पासपोर्ट रखना", "वर्क परमिट", "परमिट", "वीजा", "लेवी",
    "आप्रवासन", "निर्वासन", "वापस भेजना", "हिरासत", "छापा", "गिरफ्तार", "गिरफ्तारी",
    "अवैध कामगार", "बिना दस्तावेज",
    "फोमेमा", "स्वास्थ्य जांच", "मेडिकल जांच",
    "सोक्सो", "बीमा", "मुआवजा", "चोट", "घायल", "दुर्घटना", "कार्यस्थल दुर्घटना",
    "विकलांगता", "मृत्यु लाभ",
    "सुरक्षा", "सुरक्षा उपकरण", "हेलमेट", "दस्ताने", "खतरा", "रसायन",
    "हॉस्टल", "आवास", "रहने की जगह", "डॉरमेट्री", "कमरा", "किराया", "भीड़", "बिजली", "पानी",
    "खाना", "भोजन", "कैंटीन",
    "क्लिनिक", "अस्पताल", "डॉक्टर", "इलाज", "इलाज का खर्च", "दवा",
    "दुर्व्यवहार", "मारपीट", "पिटाई", "उत्पीड़न", "यौन उत्पीड़न", "धमकी",
    "जबरन मजदूरी", "बंधुआ मजदूरी", "मानव तस्करी", "कर्ज बंधन", "शोषण", "जब्त",
    "शिकायत", "रिपोर्ट", "श्रम कार्यालय", "श्रम विभाग", "श्रम न्यायालय", "अदालत",
    "कानूनी सहायता", "वकील", "दूतावास", "हेल्पलाइन", "पुलिस",
    "अधिकार", "मजदूर के अधिकार", "श्रम कानून", "रोजगार अधिनियम",
    "घरेलू कामगार", "बागान", "कारखाना", "निर्माण", "सुरक्षा गार्ड", "सफाई कर्मचारी",
    "विदेशी कामगार", "प्रवासी मजदूर", "प्रवासी कामगार",
    "पैसे भेजना", "बैंक खाता",
];

/// Bengali in-domain terms
pub const DOMAIN_BN: &[&str] = &[
    "বেতন", "মজুরি", "পারিশ্রমিক", "পেমেন্ট", "ন্যূনতম মজুরি", "ন্যূনতম বেতন", "মূল বেতন",
    "ভাতা", "বোনাস", "কর্তন", "বেতন কর্তন", "বেতন স্লিপ", "বকেয়া বেতন", "বেতন পাইনি",
    "ওভারটাইম", "অতিরিক্ত সময়", "ওভারটাইম রেট",
    "কাজের সময়", "কর্মঘণ্টা", "শিফট", "রাতের শিফট", "বিশ্রামের দিন", "সাপ্তাহিক ছুটি",
    "ছুটি", "বার্ষিক ছুটি", "অসুস্থতার ছুটি", "মাতৃত্বকালীন ছুটি", "জরুরি ছুটি", "সরকারি ছুটি",
    "চুক্তি", "কর্মসংস্থান চুক্তি", "চুক্তিপত্র", "পরীক্ষাকাল", "নোটিশ সময়",
    "বরখাস্ত", "চাকরি থেকে বাদ", "ছাঁটাই", "পদত্যাগ", "নিয়োগকর্তা পরিবর্তন",
    "নিয়োগকর্তা", "মালিক", "সুপারভাইজার", "কোম্পানি", "এজেন্ট", "এজেন্সি", "নিয়োগ",
    "পাসপোর্ট", "পাসপোর্ট জব্দ", "পাসপোর্ট আটকে রাখা", "ওয়ার্ক পারমিট", "পারমিট", "ভিসা",
    "লেভি",
    "অভিবাসন", "নির্বাসন", "ফেরত পাঠানো", "আটক", "অভিযান", "গ্রেপ্তার",
    "অবৈধ শ্রমিক", "কাগজপত্রহীন",
    "ফোমেমা", "স্বাস্থ্য পরীক্ষা", "মেডিকেল চেক",
    "সোকসো", "বীমা", "ক্ষতিপূরণ", "আঘাত", "আহত", "দুর্ঘটনা", "কর্মক্ষেত্রে দুর্ঘটনা",
    "অক্ষমতা", "মৃত্যু সুবিধা",
    "নিরাপত্তা", "নিরাপত্তা সরঞ্জাম", "হেলমেট", "দস্তানা", "বিপদ", "রাসায়নিক",
    "হোস্টেল", "আবাসন", "থাকার জায়গা", "ডরমিটরি", "রুম", "ভাড়া", "ভিড়", "বিদ্যুৎ", "পানি",
    "খাবার", "খাদ্য", "ক্যান্টিন",
    "ক্লিনিক", "হাসপাতাল", "ডাক্তার", "চিকিৎসা", "চিকিৎসার খরচ", "ওষুধ",
    "নির্যাতন", "মারধর", "হয়রানি", "যৌন হয়রানি", "হুমকি",
    "জোরপূর্বক শ্রম", "বাধ্যতামূলক শ্রম", "মানব পাচার", "ঋণ দাসত্ব", "শোষণ", "জব্দ",
    "অভিযোগ", "রিপোর্ট", "শ্রম অফিস", "শ্রম বিভাগ", "শ্রম আদালত", "আদালত",
    "আইনি সহায়তা", "উকিল", "দূতাবাস", "হেল্পলাইন", "পুলিশ",
    "অধিকার", "শ্রমিকের অধিকার", "শ্রম আইন", "কর্মসংস্থান আইন",
    "গৃহকর্মী", "বাগান", "কারখানা", "নির্মাণ", "নিরাপত্তা প্রহরী", "পরিচ্ছন্নতা কর্মী",
    "বিদেশি শ্রমিক", "অভিবাসী শ্রমিক",
    "টাকা পাঠানো", "রেমিট্যান্স", "ব্যাংক অ্যাকাউন্ট",
];

/// English deny terms. Matching any of these forces rejection even when the
/// question also matches domain terms.
pub const DENY_EN: &[&str] = &[
    "bomb", "explosive", "weapon", "gun", "firearm", "knife attack", "kill", "murder",
    "hack", "hacking", "crack password", "malware", "ransomware", "phishing", "ddos",
    "drug", "drugs", "narcotic", "smuggle drugs",
    "fake passport", "forge", "forged document", "counterfeit", "fake permit", "fake visa",
    "bribe", "bribery",
    "which party", "political party", "who to vote", "vote for", "election campaign",
    "overthrow", "terrorist", "terrorism", "extremist",
];

/// Malay deny terms
pub const DENY_MS: &[&str] = &[
    "bom", "bahan letupan", "senjata", "pistol", "senapang", "bunuh", "membunuh",
    "godam", "menggodam", "pecah kata laluan", "perisian hasad",
    "dadah", "seludup dadah",
    "pasport palsu", "dokumen palsu", "permit palsu", "visa palsu", "memalsukan",
    "rasuah", "sogokan",
    "parti politik", "undi siapa", "pilihan raya", "kempen politik",
    "pengganas", "keganasan",
];

/// Nepali deny terms
pub const DENY_NE: &[&str] = &[
    "बम", "विस्फोटक", "हतियार", "बन्दुक", "मार्ने", "हत्या",
    "ह्याक", "ह्याकिङ", "पासवर्ड चोर्ने",
    "लागूऔषध", "लागू पदार्थ", "ड्रग्स",
    "नक्कली राहदानी", "नक्कली पासपोर्ट", "नक्कली कागजात", "नक्कली भिसा", "नक्कली परमिट",
    "घुस", "रिश्वत",
    "राजनीतिक दल", "कसलाई भोट", "चुनाव प्रचार",
    "आतंकवादी", "आतंकवाद",
];

/// Hindi deny terms
pub const DENY_HI: &[&str] = &[
    "बम", "विस्फोटक", "हथियार", "बंदूक", "मारना", "हत्या",
    "हैक", "हैकिंग", "पासवर्ड चुराना",
    "ड्रग्स", "नशीली दवा", "मादक पदार्थ",
    "नकली पासपोर्ट", "नकली दस्तावेज", "नकली वीजा", "नकली परमिट", "जालसाजी",
    "रिश्वत", "घूस",
    "राजनीतिक पार्टी", "किसे वोट", "चुनाव प्रचार",
    "आतंकवादी", "आतंकवाद",
];

/// Bengali deny terms
pub const DENY_BN: &[&str] = &[
    "বোমা", "বিস্ফোরক", "অস্ত্র", "বন্দুক", "হত্যা", "খুন",
    "হ্যাক", "হ্যাকিং", "পাসওয়ার্ড চুরি",
    "মাদক", "ড্রাগস", "নেশাদ্রব্য",
    "নকল পাসপোর্ট", "জাল পাসপোর্ট", "জাল কাগজপত্র", "জাল ভিসা", "জাল পারমিট",
    "ঘুষ",
    "রাজনৈতিক দল", "কাকে ভোট", "নির্বাচনী প্রচার",
    "সন্ত্রাসী", "সন্ত্রাসবাদ",
];

/// The 81 provinces, as shown in the city picker.
pub const CITIES: [&str; 81] = [
    "Adana", "Adıyaman", "Afyonkarahisar", "Ağrı", "Aksaray", "Amasya", "Ankara", "Antalya",
    "Ardahan", "Artvin", "Aydın", "Balıkesir", "Bartın", "Batman", "Bayburt", "Bilecik",
    "Bingöl", "Bitlis", "Bolu", "Burdur", "Bursa", "Çanakkale", "Çankırı", "Çorum", "Denizli",
    "Diyarbakır", "Düzce", "Edirne", "Elazığ", "Erzincan", "Erzurum", "Eskişehir", "Gaziantep",
    "Giresun", "Gümüşhane", "Hakkari", "Hatay", "Iğdır", "Isparta", "Istanbul", "Izmir",
    "Kahramanmaraş", "Karabük", "Karaman", "Kars", "Kastamonu", "Kayseri", "Kilis", "Kırıkkale",
    "Kırklareli", "Kırşehir", "Kocaeli", "Konya", "Kütahya", "Malatya", "Manisa", "Mardin",
    "Mersin", "Muğla", "Muş", "Nevşehir", "Niğde", "Ordu", "Osmaniye", "Rize", "Sakarya",
    "Samsun", "Şanlıurfa", "Siirt", "Sinop", "Sivas", "Şırnak", "Tekirdağ", "Tokat", "Trabzon",
    "Tunceli", "Uşak", "Van", "Yalova", "Yozgat", "Zonguldak",
];

pub const DEFAULT_CITY: &str = "Istanbul";

/// Fold Turkish letters to ASCII and lowercase, e.g. `Şanlıurfa` -> `sanliurfa`.
pub fn normalize_city(name: &str) -> String {
    name.trim()
        .chars()
        .flat_map(|c| {
            let folded = match c {
                'ç' | 'Ç' => 'c',
                'ğ' | 'Ğ' => 'g',
                'ı' | 'I' | 'İ' => 'i',
                'ö' | 'Ö' => 'o',
                'ş' | 'Ş' => 's',
                'ü' | 'Ü' => 'u',
                other => return other.to_lowercase().collect::<Vec<_>>(),
            };
            vec![folded]
        })
        .collect()
}

/// Match user input against the catalogue, ignoring case and Turkish letters.
pub fn find_city(input: &str) -> Option<&'static str> {
    let wanted = normalize_city(input);
    if wanted.is_empty() {
        return None;
    }
    CITIES
        .iter()
        .copied()
        .find(|city| normalize_city(city) == wanted)
}

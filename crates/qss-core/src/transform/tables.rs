//! Trigonometric constants for the fixed-length transforms.
//!
//! Values are rounded from 36 significant digits, so symmetric entries
//! (e.g. `cos(4π/3)` and `cos(2π/3)`) round to exactly the same magnitude.
//! The exact zero spectra of constant inputs depend on that.
#![allow(clippy::excessive_precision)]

/// `cos(2πk/64)` for `k` in `0..32`.
pub(crate) const TWIDDLE_64_COS: [f64; 32] = [
    1.0, 0.995184726672196886244836953109479922,
    0.980785280403230449126182236134239037, 0.956940335732208864935797886980269969,
    0.923879532511286756128183189396788287, 0.88192126434835502971275686366038835,
    0.831469612302545237078788377617905757, 0.773010453362736960810906609758469801,
    0.707106781186547524400844362104849039, 0.634393284163645498215171613225493371,
    0.555570233019602224742830813948532874, 0.471396736825997648556387625905254378,
    0.382683432365089771728459984030398867, 0.290284677254462367636192375817395275,
    0.195090322016128267848284868477022241, 0.098017140329560601994195563888641846,
    0.0, -0.098017140329560601994195563888641846,
    -0.195090322016128267848284868477022241, -0.290284677254462367636192375817395275,
    -0.382683432365089771728459984030398867, -0.471396736825997648556387625905254378,
    -0.555570233019602224742830813948532874, -0.634393284163645498215171613225493371,
    -0.707106781186547524400844362104849039, -0.773010453362736960810906609758469801,
    -0.831469612302545237078788377617905757, -0.88192126434835502971275686366038835,
    -0.923879532511286756128183189396788287, -0.956940335732208864935797886980269969,
    -0.980785280403230449126182236134239037, -0.995184726672196886244836953109479922,
];

/// `sin(2πk/64)` for `k` in `0..32`.
pub(crate) const TWIDDLE_64_SIN: [f64; 32] = [
    0.0, 0.098017140329560601994195563888641846,
    0.195090322016128267848284868477022241, 0.290284677254462367636192375817395275,
    0.382683432365089771728459984030398867, 0.471396736825997648556387625905254378,
    0.555570233019602224742830813948532874, 0.634393284163645498215171613225493371,
    0.707106781186547524400844362104849039, 0.773010453362736960810906609758469801,
    0.831469612302545237078788377617905757, 0.88192126434835502971275686366038835,
    0.923879532511286756128183189396788287, 0.956940335732208864935797886980269969,
    0.980785280403230449126182236134239037, 0.995184726672196886244836953109479922,
    1.0, 0.995184726672196886244836953109479922,
    0.980785280403230449126182236134239037, 0.956940335732208864935797886980269969,
    0.923879532511286756128183189396788287, 0.88192126434835502971275686366038835,
    0.831469612302545237078788377617905757, 0.773010453362736960810906609758469801,
    0.707106781186547524400844362104849039, 0.634393284163645498215171613225493371,
    0.555570233019602224742830813948532874, 0.471396736825997648556387625905254378,
    0.382683432365089771728459984030398867, 0.290284677254462367636192375817395275,
    0.195090322016128267848284868477022241, 0.098017140329560601994195563888641846,
];

/// `cos(2πk/48)` for `k` in `0..48`.
pub(crate) const TWIDDLE_48_COS: [f64; 48] = [
    1.0, 0.991444861373810411144557526928562871,
    0.965925826289068286749743199728897368, 0.923879532511286756128183189396788287,
    0.866025403784438646763723170752936183, 0.793353340291235164579776961501299277,
    0.707106781186547524400844362104849039, 0.608761429008720639416097542898164005,
    0.5, 0.382683432365089771728459984030398867,
    0.258819045102520762348898837624048328, 0.13052619222005159154840622789548901,
    0.0, -0.13052619222005159154840622789548901,
    -0.258819045102520762348898837624048328, -0.382683432365089771728459984030398867,
    -0.5, -0.608761429008720639416097542898164005,
    -0.707106781186547524400844362104849039, -0.793353340291235164579776961501299277,
    -0.866025403784438646763723170752936183, -0.923879532511286756128183189396788287,
    -0.965925826289068286749743199728897368, -0.991444861373810411144557526928562871,
    -1.0, -0.991444861373810411144557526928562871,
    -0.965925826289068286749743199728897368, -0.923879532511286756128183189396788287,
    -0.866025403784438646763723170752936183, -0.793353340291235164579776961501299277,
    -0.707106781186547524400844362104849039, -0.608761429008720639416097542898164005,
    -0.5, -0.382683432365089771728459984030398867,
    -0.258819045102520762348898837624048328, -0.13052619222005159154840622789548901,
    0.0, 0.13052619222005159154840622789548901,
    0.258819045102520762348898837624048328, 0.382683432365089771728459984030398867,
    0.5, 0.608761429008720639416097542898164005,
    0.707106781186547524400844362104849039, 0.793353340291235164579776961501299277,
    0.866025403784438646763723170752936183, 0.923879532511286756128183189396788287,
    0.965925826289068286749743199728897368, 0.991444861373810411144557526928562871,
];

/// `sin(2πk/48)` for `k` in `0..48`.
pub(crate) const TWIDDLE_48_SIN: [f64; 48] = [
    0.0, 0.13052619222005159154840622789548901,
    0.258819045102520762348898837624048328, 0.382683432365089771728459984030398867,
    0.5, 0.608761429008720639416097542898164005,
    0.707106781186547524400844362104849039, 0.793353340291235164579776961501299277,
    0.866025403784438646763723170752936183, 0.923879532511286756128183189396788287,
    0.965925826289068286749743199728897368, 0.991444861373810411144557526928562871,
    1.0, 0.991444861373810411144557526928562871,
    0.965925826289068286749743199728897368, 0.923879532511286756128183189396788287,
    0.866025403784438646763723170752936183, 0.793353340291235164579776961501299277,
    0.707106781186547524400844362104849039, 0.608761429008720639416097542898164005,
    0.5, 0.382683432365089771728459984030398867,
    0.258819045102520762348898837624048328, 0.13052619222005159154840622789548901,
    0.0, -0.13052619222005159154840622789548901,
    -0.258819045102520762348898837624048328, -0.382683432365089771728459984030398867,
    -0.5, -0.608761429008720639416097542898164005,
    -0.707106781186547524400844362104849039, -0.793353340291235164579776961501299277,
    -0.866025403784438646763723170752936183, -0.923879532511286756128183189396788287,
    -0.965925826289068286749743199728897368, -0.991444861373810411144557526928562871,
    -1.0, -0.991444861373810411144557526928562871,
    -0.965925826289068286749743199728897368, -0.923879532511286756128183189396788287,
    -0.866025403784438646763723170752936183, -0.793353340291235164579776961501299277,
    -0.707106781186547524400844362104849039, -0.608761429008720639416097542898164005,
    -0.5, -0.382683432365089771728459984030398867,
    -0.258819045102520762348898837624048328, -0.13052619222005159154840622789548901,
];

/// `cos(πk/96)` for `k` in `0..48`.
pub(crate) const QUARTER_48_COS: [f64; 48] = [
    1.0, 0.999464587476365644429836446242859946,
    0.997858923238603506738069791272777605, 0.995184726672196886244836953109479922,
    0.991444861373810411144557526928562871, 0.986643332084879004746923932984206043,
    0.980785280403230449126182236134239037, 0.973876979277333648149689970133550392,
    0.965925826289068286749743199728897368, 0.956940335732208864935797886980269969,
    0.946930129495105664255804274853983684, 0.93590592675732570029170724946673536,
    0.923879532511286756128183189396788287, 0.910863824921175818573291707160550646,
    0.896872741532688303894103936393081198, 0.88192126434835502971275686366038835,
    0.866025403784438646763723170752936183, 0.849202181526578887649096937343100223,
    0.831469612302545237078788377617905757, 0.8128466845916152165790961432719088,
    0.793353340291235164579776961501299277, 0.773010453362736960810906609758469801,
    0.751839807478977396407519406376961443, 0.729864072697835657350101194403181883,
    0.707106781186547524400844362104849039, 0.683592302022871280513497594316155117,
    0.659345815100068868425124612055337451, 0.634393284163645498215171613225493371,
    0.608761429008720639416097542898164005, 0.58247769686780214919713476703611245,
    0.555570233019602224742830813948532874, 0.528067850650367995873448820337605568,
    0.5, 0.471396736825997648556387625905254378,
    0.44228869021900128199523897732424473, 0.412707029804394737047702186073367472,
    0.382683432365089771728459984030398867, 0.352250047921233506531752319758712672,
    0.321439465303161580701057624078901586, 0.290284677254462367636192375817395275,
    0.258819045102520762348898837624048328, 0.227076263034373207585696692577088087,
    0.195090322016128267848284868477022241, 0.16289547339458873948080063970826556,
    0.13052619222005159154840622789548901, 0.098017140329560601994195563888641846,
    0.065403129230143066815315558775175441, 0.032719082821776142063659926317288126,
];

/// `sin(πk/96)` for `k` in `0..48`.
pub(crate) const QUARTER_48_SIN: [f64; 48] = [
    0.0, 0.032719082821776142063659926317288126,
    0.065403129230143066815315558775175441, 0.098017140329560601994195563888641846,
    0.13052619222005159154840622789548901, 0.16289547339458873948080063970826556,
    0.195090322016128267848284868477022241, 0.227076263034373207585696692577088087,
    0.258819045102520762348898837624048328, 0.290284677254462367636192375817395275,
    0.321439465303161580701057624078901586, 0.352250047921233506531752319758712672,
    0.382683432365089771728459984030398867, 0.412707029804394737047702186073367472,
    0.44228869021900128199523897732424473, 0.471396736825997648556387625905254378,
    0.5, 0.528067850650367995873448820337605568,
    0.555570233019602224742830813948532874, 0.58247769686780214919713476703611245,
    0.608761429008720639416097542898164005, 0.634393284163645498215171613225493371,
    0.659345815100068868425124612055337451, 0.683592302022871280513497594316155117,
    0.707106781186547524400844362104849039, 0.729864072697835657350101194403181883,
    0.751839807478977396407519406376961443, 0.773010453362736960810906609758469801,
    0.793353340291235164579776961501299277, 0.8128466845916152165790961432719088,
    0.831469612302545237078788377617905757, 0.849202181526578887649096937343100223,
    0.866025403784438646763723170752936183, 0.88192126434835502971275686366038835,
    0.896872741532688303894103936393081198, 0.910863824921175818573291707160550646,
    0.923879532511286756128183189396788287, 0.93590592675732570029170724946673536,
    0.946930129495105664255804274853983684, 0.956940335732208864935797886980269969,
    0.965925826289068286749743199728897368, 0.973876979277333648149689970133550392,
    0.980785280403230449126182236134239037, 0.986643332084879004746923932984206043,
    0.991444861373810411144557526928562871, 0.995184726672196886244836953109479922,
    0.997858923238603506738069791272777605, 0.999464587476365644429836446242859946,
];

/// `cos(πk/128)` for `k` in `0..64`.
pub(crate) const QUARTER_64_COS: [f64; 64] = [
    1.0, 0.999698818696204220115765649666172197,
    0.998795456205172392714771604759100694, 0.997290456678690216135597140182567821,
    0.995184726672196886244836953109479922, 0.99247953459870999815676725166111782,
    0.989176509964780973451673738016243064, 0.985277642388941244774018433178547787,
    0.980785280403230449126182236134239037, 0.975702130038528544460395766419527972,
    0.970031253194543992603984207286100251, 0.963776065795439866686464355507835154,
    0.956940335732208864935797886980269969, 0.949528180593036667195936074189345028,
    0.941544065183020778412509402599502357, 0.932992798834738887711660255543302498,
    0.923879532511286756128183189396788287, 0.914209755703530654635014829393577401,
    0.903989293123443331586200297230537049, 0.893224301195515320342416447493397978,
    0.88192126434835502971275686366038835, 0.870086991108711418652292404483848844,
    0.857728610000272069902269984284770137, 0.844853565249707073259571205104957098,
    0.831469612302545237078788377617905757, 0.817584813151583696504920884130633809,
    0.803207531480644909806676512963141924, 0.788346427626606262009164705359689283,
    0.773010453362736960810906609758469801, 0.757208846506484547575464053605784473,
    0.74095112535495909117561689749516273, 0.724247082951466920941069243290553167,
    0.707106781186547524400844362104849039, 0.689540544737066924616730629957484703,
    0.671558954847018400625376850427421803, 0.653172842953776764084203013656305415,
    0.634393284163645498215171613225493371, 0.615231590580626845484913563413984278,
    0.59569930449243334346703652882996989, 0.575808191417845300745972453815730842,
    0.555570233019602224742830813948532874, 0.534997619887097210663076904637017916,
    0.514102744193221726593693838968815773, 0.492898192229784036873026688758809268,
    0.471396736825997648556387625905254378, 0.449611329654606600046294579424227076,
    0.427555093430282094320966856888798534, 0.405241314004989870908481305505052467,
    0.382683432365089771728459984030398867, 0.35989503653498814877510457232675642,
    0.33688985339222005068925321261914757, 0.31368174039889147665647884599410031,
    0.290284677254462367636192375817395275, 0.266712757474898386325286515116436394,
    0.242980179903263889948274162077471118, 0.219101240156869797227737547497357799,
    0.195090322016128267848284868477022241, 0.170961888760301226363642357208263532,
    0.14673047445536175165885012964671782, 0.122410675199216198498704474150945788,
    0.098017140329560601994195563888641846, 0.073564563599667423529465621575234322,
    0.049067674327418014254954976942682658, 0.024541228522912288031734529459282925,
];

/// `sin(πk/128)` for `k` in `0..64`.
pub(crate) const QUARTER_64_SIN: [f64; 64] = [
    0.0, 0.024541228522912288031734529459282925,
    0.049067674327418014254954976942682658, 0.073564563599667423529465621575234322,
    0.098017140329560601994195563888641846, 0.122410675199216198498704474150945788,
    0.14673047445536175165885012964671782, 0.170961888760301226363642357208263532,
    0.195090322016128267848284868477022241, 0.219101240156869797227737547497357799,
    0.242980179903263889948274162077471118, 0.266712757474898386325286515116436394,
    0.290284677254462367636192375817395275, 0.31368174039889147665647884599410031,
    0.33688985339222005068925321261914757, 0.35989503653498814877510457232675642,
    0.382683432365089771728459984030398867, 0.405241314004989870908481305505052467,
    0.427555093430282094320966856888798534, 0.449611329654606600046294579424227076,
    0.471396736825997648556387625905254378, 0.492898192229784036873026688758809268,
    0.514102744193221726593693838968815773, 0.534997619887097210663076904637017916,
    0.555570233019602224742830813948532874, 0.575808191417845300745972453815730842,
    0.59569930449243334346703652882996989, 0.615231590580626845484913563413984278,
    0.634393284163645498215171613225493371, 0.653172842953776764084203013656305415,
    0.671558954847018400625376850427421803, 0.689540544737066924616730629957484703,
    0.707106781186547524400844362104849039, 0.724247082951466920941069243290553167,
    0.74095112535495909117561689749516273, 0.757208846506484547575464053605784473,
    0.773010453362736960810906609758469801, 0.788346427626606262009164705359689283,
    0.803207531480644909806676512963141924, 0.817584813151583696504920884130633809,
    0.831469612302545237078788377617905757, 0.844853565249707073259571205104957098,
    0.857728610000272069902269984284770137, 0.870086991108711418652292404483848844,
    0.88192126434835502971275686366038835, 0.893224301195515320342416447493397978,
    0.903989293123443331586200297230537049, 0.914209755703530654635014829393577401,
    0.923879532511286756128183189396788287, 0.932992798834738887711660255543302498,
    0.941544065183020778412509402599502357, 0.949528180593036667195936074189345028,
    0.956940335732208864935797886980269969, 0.963776065795439866686464355507835154,
    0.970031253194543992603984207286100251, 0.975702130038528544460395766419527972,
    0.980785280403230449126182236134239037, 0.985277642388941244774018433178547787,
    0.989176509964780973451673738016243064, 0.99247953459870999815676725166111782,
    0.995184726672196886244836953109479922, 0.997290456678690216135597140182567821,
    0.998795456205172392714771604759100694, 0.999698818696204220115765649666172197,
];


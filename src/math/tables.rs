//! Constant lookup tables.
//!
//! All tables are `static` and never mutated, so every kernel is reentrant
//! and can run on any number of threads without synchronisation.

/// Number of subintervals in the `log`/`log10` reduction tables.
pub const LOG_TABLE_BITS: u32 = 7;

/// One subinterval of the `[OFF, 2·OFF)` mantissa range used by `log`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReductionEntry {
    /// `1/c` for the subinterval centre `c`, rounded to nearest.
    pub inv_center: f64,
    /// `-log(inv_center)` in the table's base.
    pub log_center: f64,
}

const fn entry(inv_center: f64, log_center: f64) -> ReductionEntry {
    ReductionEntry {
        inv_center,
        log_center,
    }
}

/// Natural-log reduction table.
///
/// Entry `i` covers the inputs whose bits, minus `0x3fe6900900000000`, have
/// `i` in bits 45..52. The entry that contains `1.0` is exactly `(1, 0)`, so
/// inputs near one reduce without cancellation.
pub static LOG_TABLE: [ReductionEntry; 1 << LOG_TABLE_BITS] = [
    entry(1.4143560560333055, -0.3466743434376137),
    entry(1.4065849158222963, -0.3411647209769617),
    entry(1.3988987055955229, -0.3356852881981705),
    entry(1.3912960406332493, -0.33023571605789953),
    entry(1.383775566155448, -0.32481568086312756),
    entry(1.376335956516974, -0.31942486415578114),
    entry(1.368975914428561, -0.3140629526004558),
    entry(1.361694170202681, -0.3087296378751323),
    entry(1.3544894810233437, -0.3034246165647909),
    entry(1.3473606302389545, -0.2981475900578331),
    entry(1.3403064266773865, -0.2928982644452213),
    entry(1.3333257039824575, -0.2876763504222533),
    entry(1.3264173199710323, -0.2824815631928864),
    entry(1.3195801560100098, -0.2773136223765349),
    entry(1.31281311641248, -0.2721722519172636),
    entry(1.3061151278523655, -0.26705717999530315),
    entry(1.299485138796889, -0.2619681389408172),
    entry(1.292922118956243, -0.2569048651498528),
    entry(1.2864250587498474, -0.2518670990024074),
    entry(1.2799929687886236, -0.24685458478255065),
    entry(1.2736248793727198, -0.24186707060053622),
    entry(1.2673198400041576, -0.23690430831684833),
    entry(1.2610769189138809, -0.2319660534681219),
    entry(1.2548952026027165, -0.22705206519488433),
    entry(1.2487737953957707, -0.2221621061710635),
    entry(1.2427118190098017, -0.21729594253520992),
    entry(1.2367084121331349, -0.21245334382338626),
    entry(1.2307627300176942, -0.20763408290367197),
    entry(1.2248739440827456, -0.20283793591223961),
    entry(1.2190412415299632, -0.19806468219095708),
    entry(1.2132638249694392, -0.1933141042264707),
    entry(1.207540912056281, -0.18858598759073006),
    entry(1.201871735137443, -0.18388012088291114),
    entry(1.1962555409084608, -0.17919629567269957),
    entry(1.1906915900797654, -0.17453430644489712),
    entry(1.1851791570522656, -0.16989395054531164),
    entry(1.179717529601901, -0.16527502812789824),
    entry(1.1743060085728765, -0.1606773421031149),
    entry(1.168943907579302, -0.15610069808745966),
    entry(1.1636305527149688, -0.15154490435415843),
    entry(1.1583652822710047, -0.14700977178496913),
    entry(1.1531474464611606, -0.14249511382307556),
    entry(1.1479764071544893, -0.13800074642703902),
    entry(1.1428515376151829, -0.13352648802578013),
    entry(1.137772222249349, -0.12907215947456332),
    entry(1.132737856358509, -0.12463758401195732),
    entry(1.1277478458996135, -0.12022258721774601),
    entry(1.12280160725137, -0.11582699697176392),
    entry(1.1178985669866954, -0.11145064341363219),
    entry(1.1130381616511045, -0.10709335890337308),
    entry(1.1082198375468528, -0.10275497798287729),
    entry(1.1034430505226636, -0.09843533733820403),
    entry(1.098707265768869, -0.09413427576269279),
    entry(1.0940119576178038, -0.08985163412086332),
    entry(1.0893566093492955, -0.08558725531308668),
    entry(1.0847407130011002, -0.08134098424100616),
    entry(1.0801637691841364, -0.07711266777368829),
    entry(1.0756252869023775, -0.07290215471448769),
    entry(1.0711247833772666, -0.0687092957686066),
    entry(1.0666617838765182, -0.06453394351132968),
    entry(1.062235821547186, -0.0603759523569226),
    entry(1.0578464372528655, -0.05623517852817068),
    entry(1.0534931794149192, -0.0521114800265491),
    entry(1.0491756038576046, -0.04800471660300334),
    entry(1.044893273656996, -0.043914749729328434),
    entry(1.0406457589935894, -0.039841442570129476),
    entry(1.03643263700849, -0.035784659955353654),
    entry(1.0322534916630777, -0.03174426835337453),
    entry(1.0281079136020534, -0.02772013584461855),
    entry(1.0239955000197754, -0.023712132095722014),
    entry(1.0199158545297857, -0.019720128334200327),
    entry(1.0158685870374489, -0.01574399732362466),
    entry(1.0118533136156056, -0.0117836133392867),
    entry(1.0078696563831684, -0.00783885214434661),
    entry(1.0039172433865702, -0.003909590966446772),
    entry(1.0, 0.0),
    entry(0.9922396115736811, 0.0077906569392197),
    entry(0.9846070636797879, 0.015512637521890152),
    entry(0.977091042257406, 0.02317544575638686),
    entry(0.9696888989996791, 0.030779981607970155),
    entry(0.9623980652474198, 0.03832712466510619),
    entry(0.9552160490172054, 0.04581773475001674),
    entry(0.9481404321615583, 0.0532526525065321),
    entry(0.941168867654411, 0.06063269996625133),
    entry(0.9342990769954549, 0.06795868109396352),
    entry(0.9275288477273431, 0.075231382313235),
    entry(0.9208560310600625, 0.0824515730130229),
    entry(0.9142785395971188, 0.08962000603612878),
    entry(0.907794345158478, 0.09673741815027033),
    entry(0.9014014766954962, 0.1038045305025066),
    entry(0.8950980182933336, 0.1108220490577185),
    entry(0.8888821072566009, 0.117790665021811),
    entry(0.88275193227422, 0.12471105525027089),
    entry(0.8767057316597007, 0.13158388264268484),
    entry(0.8707417916632413, 0.13840979652379323),
    entry(0.8648584448522589, 0.14518943301162515),
    entry(0.8590540685571314, 0.15192341537323925),
    entry(0.8533270833791093, 0.15861235436856666),
    entry(0.8476759517575168, 0.16525684858282938),
    entry(0.842099176593508, 0.17185748474798915),
    entry(0.8365952999277956, 0.17841483805365546),
    entry(0.8311629016698941, 0.18492947244786717),
    entry(0.8258005983765551, 0.1914019409281391),
    entry(0.8205070420771838, 0.1978327858231504),
    entry(0.8152809191441454, 0.2042225390654335),
    entry(0.810120949205969, 0.21057172245540612),
    entry(0.8050258841015648, 0.21688084791707313),
    entry(0.7999945068736558, 0.22315041774571387),
    entry(0.7950256307997219, 0.2293809248478526),
    entry(0.7901180984588351, 0.23557285297379918),
    entry(0.7852707808328434, 0.24172667694303526),
    entry(0.7804825764404386, 0.24784286286270726),
    entry(0.7757524105027118, 0.25392186833947833),
    entry(0.7710792341388695, 0.25996414268498025),
    entry(0.7664620235908464, 0.26597012711509466),
    entry(0.7618997794756097, 0.2719402549432862),
    entry(0.7573915260640092, 0.27787495176819915),
    entry(0.7529363105850793, 0.28377463565571825),
    entry(0.7485332025547511, 0.28963971731569343),
    entry(0.7441812931279821, 0.2954706002735092),
    entry(0.7398796944733547, 0.3012676810366825),
    entry(0.7356275391692396, 0.30703134925665976),
    entry(0.7314239796206636, 0.3127619878859767),
    entry(0.7272681874960553, 0.31845997333094117),
    entry(0.7231593531830843, 0.3241256755999912),
    entry(0.7190966852628439, 0.32975945844787297),
    entry(0.7150794100016572, 0.33536167951578033),
    entry(0.7111067708598241, 0.3409326904675919),
];

/// Base-10 reduction table, same centres as [`LOG_TABLE`].
pub static LOG10_TABLE: [ReductionEntry; 1 << LOG_TABLE_BITS] = [
    entry(1.4143560560333055, -0.15055875437238844),
    entry(1.4065849158222963, -0.14816595574035704),
    entry(1.3988987055955229, -0.14578626832056824),
    entry(1.3912960406332493, -0.14341954921131486),
    entry(1.383775566155448, -0.14106565783450398),
    entry(1.376335956516974, -0.13872445588555155),
    entry(1.368975914428561, -0.13639580728462047),
    entry(1.361694170202681, -0.13407957812915913),
    entry(1.3544894810233437, -0.1317756366476987),
    entry(1.3473606302389545, -0.12948385315486974),
    entry(1.3403064266773865, -0.12720410000759905),
    entry(1.3333257039824575, -0.12493625156245082),
    entry(1.3264173199710323, -0.12268018413407529),
    entry(1.3195801560100098, -0.12043577595473125),
    entry(1.31281311641248, -0.11820290713484932),
    entry(1.3061151278523655, -0.11598145962460366),
    entry(1.299485138796889, -0.1137713171764613),
    entry(1.292922118956243, -0.11157236530868009),
    entry(1.2864250587498474, -0.10938449126972556),
    entry(1.2799929687886236, -0.10720758400358019),
    entry(1.2736248793727198, -0.10504153411591712),
    entry(1.2673198400041576, -0.10288623384111388),
    entry(1.2610769189138809, -0.10074157701008002),
    entry(1.2548952026027165, -0.09860745901887565),
    entry(1.2487737953957707, -0.09648377679809725),
    entry(1.2427118190098017, -0.09437042878300778),
    entry(1.2367084121331349, -0.09226731488439097),
    entry(1.2307627300176942, -0.09017433646010706),
    entry(1.2248739440827456, -0.0880913962873311),
    entry(1.2190412415299632, -0.08601839853545393),
    entry(1.2132638249694392, -0.08395524873962631),
    entry(1.207540912056281, -0.08190185377492919),
    entry(1.201871735137443, -0.07985812183115122),
    entry(1.1962555409084608, -0.07782396238815698),
    entry(1.1906915900797654, -0.07579928619182999),
    entry(1.1851791570522656, -0.07378400523057281),
    entry(1.179717529601901, -0.07177803271235093),
    entry(1.1743060085728765, -0.06978128304226383),
    entry(1.168943907579302, -0.06779367180062923),
    entry(1.1636305527149688, -0.06581511572156709),
    entry(1.1583652822710047, -0.06384553267206845),
    entry(1.1531474464611606, -0.06188484163153749),
    entry(1.1479764071544893, -0.05993296267179295),
    entry(1.1428515376151829, -0.05798981693751693),
    entry(1.137772222249349, -0.05605532662713938),
    entry(1.132737856358509, -0.05412941497414603),
    entry(1.1277478458996135, -0.052212006228799505),
    entry(1.12280160725137, -0.05030302564026173),
    entry(1.1178985669866954, -0.04840239943910746),
    entry(1.1130381616511045, -0.046510054820219415),
    entry(1.1082198375468528, -0.04462591992605374),
    entry(1.1034430505226636, -0.042749923830267135),
    entry(1.098707265768869, -0.0408819965216965),
    entry(1.0940119576178038, -0.03902206888868088),
    entry(1.0893566093492955, -0.03717007270371832),
    entry(1.0847407130011002, -0.03532594060844834),
    entry(1.0801637691841364, -0.03348960609895154),
    entry(1.0756252869023775, -0.031661003511359136),
    entry(1.0711247833772666, -0.029840068007764297),
    entry(1.0666617838765182, -0.028026735562426647),
    entry(1.062235821547186, -0.026220942948265116),
    entry(1.0578464372528655, -0.024422627723628756),
    entry(1.0534931794149192, -0.022631728219341795),
    entry(1.0491756038576046, -0.020848183526013767),
    entry(1.044893273656996, -0.01907193348160966),
    entry(1.0406457589935894, -0.017302918659272543),
    entry(1.03643263700849, -0.015541080355394359),
    entry(1.0322534916630777, -0.013786360577926586),
    entry(1.0281079136020534, -0.012038702034926373),
    entry(1.0239955000197754, -0.01029804812333306),
    entry(1.0199158545297857, -0.008564342917967168),
    entry(1.0158685870374489, -0.0068375311607497555),
    entry(1.0118533136156056, -0.005117558250133765),
    entry(1.0078696563831684, -0.0034043702307452054),
    entry(1.0039172433865702, -0.0016979137832266345),
    entry(1.0, 0.0),
    entry(0.9922396115736811, 0.0033834393191043933),
    entry(0.9846070636797879, 0.006737052875522228),
    entry(0.977091042257406, 0.010064968207646947),
    entry(0.9696888989996791, 0.013367576165425018),
    entry(0.9623980652474198, 0.01664525874927364),
    entry(0.9552160490172054, 0.01989838937523914),
    entry(0.9481404321615583, 0.02312733313029826),
    entry(0.941168867654411, 0.026332447018238437),
    entry(0.9342990769954549, 0.029514080196531203),
    entry(0.9275288477273431, 0.03267257420459186),
    entry(0.9208560310600625, 0.03580826318379892),
    entry(0.9142785395971188, 0.03892147408962685),
    entry(0.907794345158478, 0.04201252689622988),
    entry(0.9014014766954962, 0.0450817347937964),
    entry(0.8950980182933336, 0.04812940437897862),
    entry(0.8888821072566009, 0.051155835838686894),
    entry(0.88275193227422, 0.05416132312752421),
    entry(0.8767057316597007, 0.0571461541391231),
    entry(0.8707417916632413, 0.06011061087163529),
    entry(0.8648584448522589, 0.06305496958761063),
    entry(0.8590540685571314, 0.06597950096849348),
    entry(0.8533270833791093, 0.06888447026395164),
    entry(0.8476759517575168, 0.07177013743624401),
    entry(0.842099176593508, 0.07463675729982396),
    entry(0.8365952999277956, 0.07748457965636488),
    entry(0.8311629016698941, 0.08031384942538816),
    entry(0.8258005983765551, 0.08312480677066299),
    entry(0.8205070420771838, 0.08591768722254207),
    entry(0.8152809191441454, 0.08869272179638905),
    entry(0.810120949205969, 0.09145013710724594),
    entry(0.8050258841015648, 0.09419015548088323),
    entry(0.7999945068736558, 0.09691299506136902),
    entry(0.7950256307997219, 0.09961886991528689),
    entry(0.7901180984588351, 0.10230799013272704),
    entry(0.7852707808328434, 0.10498056192517023),
    entry(0.7804825764404386, 0.10763678772037814),
    entry(0.7757524105027118, 0.11027686625439946),
    entry(0.7710792341388695, 0.11290099266079655),
    entry(0.7664620235908464, 0.11550935855719205),
    entry(0.7618997794756097, 0.11810215212923271),
    entry(0.7573915260640092, 0.12067955821206112),
    entry(0.7529363105850793, 0.12324175836938422),
    entry(0.7485332025547511, 0.1257889309702234),
    entry(0.7441812931279821, 0.1283212512634265),
    entry(0.7398796944733547, 0.13083889145002014),
    entry(0.7356275391692396, 0.13334202075347742),
    entry(0.7314239796206636, 0.13583080548797136),
    entry(0.7272681874960553, 0.1383054091246845),
    entry(0.7231593531830843, 0.14076599235623966),
    entry(0.7190966852628439, 0.14321271315931589),
    entry(0.7150794100016572, 0.1456457268555102),
    entry(0.7111067708598241, 0.14806518617050454),
];

/// Quadrant table and polynomials for single-precision sine and cosine,
/// evaluated in double precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinCosTable {
    /// Sign applied to the reduced argument for `n mod 4`.
    pub sign: [f64; 4],
    /// `2/π`.
    pub hpi_inv: f64,
    /// `π/2`.
    pub hpi: f64,
    /// Cosine polynomial in `x²`, lowest degree first.
    pub cos_poly: [f64; 5],
    /// Sine polynomial coefficients of `x³`, `x⁵` and `x⁷`.
    pub sin_poly: [f64; 3],
}

pub static SINCOSF_TABLE: SinCosTable = SinCosTable {
    sign: [1.0, -1.0, -1.0, 1.0],
    hpi_inv: 0.6366197723675814,
    hpi: 1.5707963267948966,
    cos_poly: [
        1.0,
        -0.49999999725108224,
        0.041666623324344516,
        -0.001388676379437604,
        2.4390450703564542e-05,
    ],
    sin_poly: [
        -0.16666654943701084,
        0.008332178146138854,
        -0.00019517298981385725,
    ],
};

/// Bits of `4/π` for the large-argument reduction.
///
/// Entry `i` holds bits `8i..8i + 32` of the binary expansion, so any window
/// of 96 consecutive bits is available as three overlapping words.
pub static INV_PIO4: [u32; 24] = [
    0x000000a2, 0x0000a2f9, 0x00a2f983, 0xa2f9836e,
    0xf9836e4e, 0x836e4e44, 0x6e4e4415, 0x4e441529,
    0x441529fc, 0x1529fc27, 0x29fc2757, 0xfc2757d1,
    0x2757d1f5, 0x57d1f534, 0xd1f534dd, 0xf534ddc0,
    0x34ddc0db, 0xddc0db62, 0xc0db6295, 0xdb629599,
    0x6295993c, 0x95993c43, 0x993c4390, 0x3c439041,
];

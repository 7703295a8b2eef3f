//! Built-in list of mid-to-large US cities

/// `(city, state, lat, lon, population, county)`
pub type BundledCity = (&'static str, &'static str, f64, f64, i64, &'static str);

pub const BUNDLED_CITIES: [BundledCity; 219] = [
    ("New York", "NY", 40.7128, -74.006, 8_336_817, "New York"),
    ("Los Angeles", "CA", 34.0522, -118.2437, 3_979_576, "Los Angeles"),
    ("Chicago", "IL", 41.8781, -87.6298, 2_693_976, "Cook"),
    ("Houston", "TX", 29.7604, -95.3698, 2_320_268, "Harris"),
    ("Phoenix", "AZ", 33.4484, -112.074, 1_680_992, "Maricopa"),
    ("Philadelphia", "PA", 39.9526, -75.1652, 1_584_064, "Philadelphia"),
    ("San Antonio", "TX", 29.4241, -98.4936, 1_547_253, "Bexar"),
    ("San Diego", "CA", 32.7157, -117.1611, 1_423_851, "San Diego"),
    ("Dallas", "TX", 32.7767, -96.797, 1_343_573, "Dallas"),
    ("San Jose", "CA", 37.3382, -121.8863, 1_021_795, "Santa Clara"),
    ("Austin", "TX", 30.2672, -97.7431, 978_908, "Travis"),
    ("Jacksonville", "FL", 30.3322, -81.6557, 911_507, "Duval"),
    ("Fort Worth", "TX", 32.7555, -97.3308, 909_585, "Tarrant"),
    ("Columbus", "OH", 39.9612, -82.9988, 898_553, "Franklin"),
    ("Charlotte", "NC", 35.2271, -80.8431, 885_708, "Mecklenburg"),
    ("San Francisco", "CA", 37.7749, -122.4194, 881_549, "San Francisco"),
    ("Indianapolis", "IN", 39.7684, -86.1581, 876_384, "Marion"),
    ("Seattle", "WA", 47.6062, -122.3321, 753_675, "King"),
    ("Denver", "CO", 39.7392, -104.9903, 715_522, "Denver"),
    ("Washington", "DC", 38.9072, -77.0369, 705_749, "District of Columbia"),
    ("Boston", "MA", 42.3601, -71.0589, 695_926, "Suffolk"),
    ("El Paso", "TX", 31.7619, -106.485, 695_145, "El Paso"),
    ("Nashville", "TN", 36.1627, -86.7816, 689_447, "Davidson"),
    ("Detroit", "MI", 42.3314, -83.0458, 670_031, "Wayne"),
    ("Oklahoma City", "OK", 35.4676, -97.5164, 695_057, "Oklahoma"),
    ("Portland", "OR", 45.5152, -122.6784, 652_503, "Multnomah"),
    ("Las Vegas", "NV", 36.1699, -115.1398, 648_224, "Clark"),
    ("Memphis", "TN", 35.1495, -90.049, 633_104, "Shelby"),
    ("Louisville", "KY", 38.2527, -85.7585, 617_638, "Jefferson"),
    ("Baltimore", "MD", 39.2904, -76.6122, 576_498, "Baltimore City"),
    ("Milwaukee", "WI", 43.0389, -87.9065, 577_222, "Milwaukee"),
    ("Albuquerque", "NM", 35.0844, -106.6504, 560_513, "Bernalillo"),
    ("Tucson", "AZ", 32.2226, -110.9747, 548_073, "Pima"),
    ("Fresno", "CA", 36.7378, -119.7871, 542_107, "Fresno"),
    ("Sacramento", "CA", 38.5816, -121.4944, 524_943, "Sacramento"),
    ("Kansas City", "MO", 39.0997, -94.5786, 508_090, "Jackson"),
    ("Mesa", "AZ", 33.4152, -111.8315, 504_258, "Maricopa"),
    ("Atlanta", "GA", 33.749, -84.388, 498_715, "Fulton"),
    ("Colorado Springs", "CO", 38.8339, -104.8214, 478_961, "El Paso"),
    ("Omaha", "NE", 41.2565, -95.9345, 478_192, "Douglas"),
    ("Raleigh", "NC", 35.7796, -78.6382, 474_069, "Wake"),
    ("Miami", "FL", 25.7617, -80.1918, 470_914, "Miami-Dade"),
    ("Long Beach", "CA", 33.7701, -118.1937, 466_742, "Los Angeles"),
    ("Virginia Beach", "VA", 36.8529, -75.978, 459_470, "Virginia Beach City"),
    ("Oakland", "CA", 37.8044, -122.2712, 433_031, "Alameda"),
    ("Minneapolis", "MN", 44.9778, -93.265, 429_954, "Hennepin"),
    ("Tulsa", "OK", 36.154, -95.9928, 413_066, "Tulsa"),
    ("Arlington", "TX", 32.7357, -97.1081, 398_854, "Tarrant"),
    ("Tampa", "FL", 27.9506, -82.4572, 384_959, "Hillsborough"),
    ("New Orleans", "LA", 29.9511, -90.0715, 383_997, "Orleans"),
    ("Wichita", "KS", 37.6872, -97.3301, 397_532, "Sedgwick"),
    ("Cleveland", "OH", 41.4993, -81.6944, 383_793, "Cuyahoga"),
    ("Bakersfield", "CA", 35.3733, -119.0187, 380_874, "Kern"),
    ("Aurora", "CO", 39.7294, -104.8319, 379_289, "Arapahoe"),
    ("Anaheim", "CA", 33.8366, -117.9143, 352_497, "Orange"),
    ("Santa Ana", "CA", 33.7455, -117.8677, 334_136, "Orange"),
    ("Riverside", "CA", 33.9533, -117.3962, 331_816, "Riverside"),
    ("Corpus Christi", "TX", 27.8006, -97.3964, 326_586, "Nueces"),
    ("Lexington", "KY", 38.0406, -84.5037, 323_152, "Fayette"),
    ("Stockton", "CA", 37.9577, -121.2908, 320_804, "San Joaquin"),
    ("Henderson", "NV", 36.0395, -114.9817, 320_189, "Clark"),
    ("Saint Paul", "MN", 44.9537, -93.09, 308_096, "Ramsey"),
    ("St. Louis", "MO", 38.627, -90.1994, 301_578, "St. Louis City"),
    ("Cincinnati", "OH", 39.1031, -84.512, 309_317, "Hamilton"),
    ("Pittsburgh", "PA", 40.4406, -79.9959, 300_286, "Allegheny"),
    ("Greensboro", "NC", 36.0726, -79.792, 296_710, "Guilford"),
    ("Plano", "TX", 33.0198, -96.6989, 288_061, "Collin"),
    ("Lincoln", "NE", 40.8136, -96.7026, 295_178, "Lancaster"),
    ("Buffalo", "NY", 42.8864, -78.8784, 278_349, "Erie"),
    ("Fort Wayne", "IN", 41.0793, -85.1394, 270_402, "Allen"),
    ("Jersey City", "NJ", 40.7178, -74.0431, 292_449, "Hudson"),
    ("Chula Vista", "CA", 32.6401, -117.0842, 275_487, "San Diego"),
    ("Orlando", "FL", 28.5383, -81.3792, 307_573, "Orange"),
    ("St. Petersburg", "FL", 27.7676, -82.6404, 265_351, "Pinellas"),
    ("Norfolk", "VA", 36.8468, -76.2852, 238_005, "Norfolk City"),
    ("Chandler", "AZ", 33.3062, -111.8413, 261_165, "Maricopa"),
    ("Laredo", "TX", 27.5306, -99.4803, 262_491, "Webb"),
    ("Madison", "WI", 43.0732, -89.4012, 269_840, "Dane"),
    ("Durham", "NC", 35.994, -78.8986, 283_506, "Durham"),
    ("Lubbock", "TX", 33.5779, -101.8552, 258_862, "Lubbock"),
    ("Winston-Salem", "NC", 36.0999, -80.2442, 249_545, "Forsyth"),
    ("Garland", "TX", 32.9126, -96.6389, 246_018, "Dallas"),
    ("Glendale", "AZ", 33.5387, -112.186, 248_325, "Maricopa"),
    ("Hialeah", "FL", 25.8576, -80.2781, 223_109, "Miami-Dade"),
    ("Reno", "NV", 39.5296, -119.8138, 264_165, "Washoe"),
    ("Baton Rouge", "LA", 30.4515, -91.1871, 220_236, "East Baton Rouge"),
    ("Irvine", "CA", 33.6846, -117.8265, 307_670, "Orange"),
    ("Chesapeake", "VA", 36.7682, -76.2875, 249_422, "Chesapeake City"),
    ("Irving", "TX", 32.814, -96.9489, 256_684, "Dallas"),
    ("Scottsdale", "AZ", 33.4942, -111.9261, 258_069, "Maricopa"),
    ("North Las Vegas", "NV", 36.1989, -115.1175, 262_527, "Clark"),
    ("Fremont", "CA", 37.5485, -121.9886, 230_504, "Alameda"),
    ("Gilbert", "AZ", 33.3528, -111.789, 267_918, "Maricopa"),
    ("San Bernardino", "CA", 34.1083, -117.2898, 222_101, "San Bernardino"),
    ("Boise", "ID", 43.615, -116.2023, 235_684, "Ada"),
    ("Birmingham", "AL", 33.5186, -86.8104, 200_733, "Jefferson"),
    ("Spokane", "WA", 47.6587, -117.426, 230_176, "Spokane"),
    ("Rochester", "NY", 43.1566, -77.6088, 206_284, "Monroe"),
    ("Des Moines", "IA", 41.5868, -93.625, 214_133, "Polk"),
    ("Modesto", "CA", 37.6391, -120.9969, 218_464, "Stanislaus"),
    ("Fayetteville", "NC", 35.0527, -78.8784, 211_657, "Cumberland"),
    ("Tacoma", "WA", 47.2529, -122.4443, 219_346, "Pierce"),
    ("Oxnard", "CA", 34.1975, -119.1771, 202_063, "Ventura"),
    ("Fontana", "CA", 34.0922, -117.435, 208_393, "San Bernardino"),
    ("Columbus", "GA", 32.4609, -84.9877, 206_922, "Muscogee"),
    ("Montgomery", "AL", 32.3668, -86.3, 200_603, "Montgomery"),
    ("Moreno Valley", "CA", 33.9425, -117.2297, 208_634, "Riverside"),
    ("Shreveport", "LA", 32.5252, -93.7502, 187_593, "Caddo"),
    ("Aurora", "IL", 41.7606, -88.3201, 180_542, "Kane"),
    ("Yonkers", "NY", 40.9312, -73.8988, 211_569, "Westchester"),
    ("Akron", "OH", 41.0814, -81.519, 190_469, "Summit"),
    ("Huntington Beach", "CA", 33.6961, -118.0, 198_711, "Orange"),
    ("Little Rock", "AR", 34.7465, -92.2896, 198_541, "Pulaski"),
    ("Augusta", "GA", 33.4735, -82.0105, 202_081, "Richmond"),
    ("Amarillo", "TX", 35.222, -101.8313, 200_393, "Potter"),
    ("Glendale", "CA", 34.1425, -118.2551, 201_361, "Los Angeles"),
    ("Mobile", "AL", 30.6954, -88.0399, 187_041, "Mobile"),
    ("Grand Rapids", "MI", 42.9634, -85.6681, 198_917, "Kent"),
    ("Salt Lake City", "UT", 40.7608, -111.891, 200_567, "Salt Lake"),
    ("Tallahassee", "FL", 30.4518, -84.2807, 194_500, "Leon"),
    ("Huntsville", "AL", 34.7304, -86.5861, 215_006, "Madison"),
    ("Grand Prairie", "TX", 32.746, -96.9978, 196_100, "Dallas"),
    ("Knoxville", "TN", 35.9606, -83.9207, 190_740, "Knox"),
    ("Worcester", "MA", 42.2626, -71.8023, 206_518, "Worcester"),
    ("Fargo", "ND", 46.8772, -96.7898, 125_990, "Cass"),
    ("Grand Forks", "ND", 47.9253, -97.0329, 59_166, "Grand Forks"),
    ("Bismarck", "ND", 46.8083, -100.7837, 73_622, "Burleigh"),
    ("Newport News", "VA", 37.0871, -76.473, 186_247, "Newport News City"),
    ("Brownsville", "TX", 25.9018, -97.4975, 186_738, "Cameron"),
    ("Santa Clarita", "CA", 34.3917, -118.5426, 228_673, "Los Angeles"),
    ("Providence", "RI", 41.824, -71.4128, 190_934, "Providence"),
    ("Fort Lauderdale", "FL", 26.1224, -80.1373, 182_760, "Broward"),
    ("Chattanooga", "TN", 35.0456, -85.3097, 181_099, "Hamilton"),
    ("Tempe", "AZ", 33.4255, -111.94, 195_805, "Maricopa"),
    ("Oceanside", "CA", 33.1959, -117.3795, 174_068, "San Diego"),
    ("Garden Grove", "CA", 33.7739, -117.9415, 171_644, "Orange"),
    ("Rancho Cucamonga", "CA", 34.1064, -117.5931, 177_451, "San Bernardino"),
    ("Santa Rosa", "CA", 38.4404, -122.7144, 178_127, "Sonoma"),
    ("Vancouver", "WA", 45.6387, -122.6615, 183_741, "Clark"),
    ("Sioux Falls", "SD", 43.5446, -96.7311, 192_517, "Minnehaha"),
    ("Ontario", "CA", 34.0633, -117.6509, 175_265, "San Bernardino"),
    ("McKinney", "TX", 33.1972, -96.6154, 199_177, "Collin"),
    ("Elk Grove", "CA", 38.4088, -121.3716, 176_124, "Sacramento"),
    ("Salem", "OR", 44.9429, -123.0351, 178_302, "Marion"),
    ("Pembroke Pines", "FL", 26.007, -80.2962, 171_178, "Broward"),
    ("Corona", "CA", 33.8753, -117.5664, 169_868, "Riverside"),
    ("Eugene", "OR", 44.0521, -123.0868, 176_654, "Lane"),
    ("Springfield", "MO", 37.2153, -93.2982, 169_176, "Greene"),
    ("Peoria", "AZ", 33.5806, -112.2374, 190_985, "Maricopa"),
    ("Fort Collins", "CO", 40.5853, -105.0844, 169_810, "Larimer"),
    ("Cary", "NC", 35.7915, -78.7811, 174_721, "Wake"),
    ("Lancaster", "CA", 34.6868, -118.1542, 173_516, "Los Angeles"),
    ("Hayward", "CA", 37.6688, -122.0808, 162_954, "Alameda"),
    ("Palmdale", "CA", 34.5794, -118.1165, 169_450, "Los Angeles"),
    ("Salinas", "CA", 36.6777, -121.6555, 164_203, "Monterey"),
    ("Springfield", "IL", 39.7817, -89.6501, 114_394, "Sangamon"),
    ("Hollywood", "FL", 26.0112, -80.1494, 154_817, "Broward"),
    ("Pasadena", "TX", 29.6911, -95.2091, 151_950, "Harris"),
    ("Pasadena", "CA", 34.1478, -118.1445, 138_699, "Los Angeles"),
    ("Sunnyvale", "CA", 37.3688, -122.0363, 155_805, "Santa Clara"),
    ("Springfield", "MA", 42.1015, -72.5898, 155_929, "Hampden"),
    ("Killeen", "TX", 31.1171, -97.7278, 153_095, "Bell"),
    ("Kansas City", "KS", 39.1142, -94.6275, 156_607, "Wyandotte"),
    ("Lakewood", "CO", 39.7047, -105.0814, 155_984, "Jefferson"),
    ("Torrance", "CA", 33.8358, -118.3406, 147_067, "Los Angeles"),
    ("Escondido", "CA", 33.1192, -117.0864, 151_038, "San Diego"),
    ("Naperville", "IL", 41.7508, -88.1535, 148_449, "DuPage"),
    ("Dayton", "OH", 39.7589, -84.1916, 140_407, "Montgomery"),
    ("Alexandria", "VA", 38.8048, -77.0469, 159_467, "Alexandria City"),
    ("Rockford", "IL", 42.2711, -89.094, 148_655, "Winnebago"),
    ("Joliet", "IL", 41.525, -88.0817, 150_362, "Will"),
    ("Clarksville", "TN", 36.5298, -87.3595, 166_722, "Montgomery"),
    ("Bellevue", "WA", 47.6101, -122.2015, 151_854, "King"),
    ("Concord", "CA", 37.978, -122.0311, 129_295, "Contra Costa"),
    ("Cedar Rapids", "IA", 41.9779, -91.6656, 137_710, "Linn"),
    ("Charleston", "SC", 32.7765, -79.9311, 150_227, "Charleston"),
    ("Gainesville", "FL", 29.6516, -82.3248, 141_085, "Alachua"),
    ("Round Rock", "TX", 30.5083, -97.6789, 133_372, "Williamson"),
    ("Clearwater", "FL", 27.9659, -82.8001, 117_292, "Pinellas"),
    ("Waterbury", "CT", 41.5581, -73.0515, 114_403, "New Haven"),
    ("West Valley City", "UT", 40.6916, -112.0011, 140_230, "Salt Lake"),
    ("Costa Mesa", "CA", 33.6411, -117.9187, 112_174, "Orange"),
    ("Miami Gardens", "FL", 25.942, -80.2456, 111_640, "Miami-Dade"),
    ("Carrollton", "TX", 32.9537, -96.8903, 139_248, "Dallas"),
    ("Cape Coral", "FL", 26.5629, -81.9495, 194_016, "Lee"),
    ("Stamford", "CT", 41.0534, -73.5387, 135_470, "Fairfield"),
    ("West Jordan", "UT", 40.6097, -111.9391, 116_961, "Salt Lake"),
    ("Surprise", "AZ", 33.6292, -112.3679, 141_664, "Maricopa"),
    ("Sterling Heights", "MI", 42.5803, -83.0302, 134_346, "Macomb"),
    ("Denton", "TX", 33.2148, -97.1331, 148_910, "Denton"),
    ("Coral Springs", "FL", 26.271, -80.2706, 134_394, "Broward"),
    ("Thornton", "CO", 39.8681, -104.9719, 141_867, "Adams"),
    ("Miramar", "FL", 25.9873, -80.2322, 140_823, "Broward"),
    ("Thousand Oaks", "CA", 34.1706, -118.8376, 126_813, "Ventura"),
    ("Fullerton", "CA", 33.8704, -117.9243, 143_617, "Orange"),
    ("Roseville", "CA", 38.7521, -121.288, 147_773, "Placer"),
    ("Kent", "WA", 47.3809, -122.2348, 136_588, "King"),
    ("Visalia", "CA", 36.3302, -119.2921, 141_384, "Tulare"),
    ("Olathe", "KS", 38.8814, -94.8191, 140_545, "Johnson"),
    ("Columbia", "MO", 38.9517, -92.3341, 126_254, "Boone"),
    ("Columbia", "SC", 34.0007, -81.0348, 137_300, "Richland"),
    ("Warren", "MI", 42.5145, -83.0146, 139_387, "Macomb"),
    ("Downey", "CA", 33.9401, -118.1332, 113_242, "Los Angeles"),
    ("Centennial", "CO", 39.5807, -104.8756, 108_418, "Arapahoe"),
    ("Pearland", "TX", 29.5638, -95.2861, 131_448, "Brazoria"),
    ("Temecula", "CA", 33.4936, -117.1484, 114_761, "Riverside"),
    ("Richardson", "TX", 32.9483, -96.7299, 120_981, "Dallas"),
    ("Concord", "NC", 35.4087, -80.5792, 105_240, "Cabarrus"),
    ("Elgin", "IL", 42.0354, -88.2826, 114_797, "Kane"),
    ("Overland Park", "KS", 38.9822, -94.6708, 197_238, "Johnson"),
    ("Inglewood", "CA", 33.9617, -118.3531, 109_398, "Los Angeles"),
    ("League City", "TX", 29.5075, -95.0949, 114_140, "Galveston"),
    ("Manchester", "NH", 42.9956, -71.4548, 115_644, "Hillsborough"),
    ("Rochester", "MN", 44.0121, -92.4802, 121_395, "Olmsted"),
    ("Lowell", "MA", 42.6334, -71.3162, 115_554, "Middlesex"),
    ("Broken Arrow", "OK", 36.0365, -95.7975, 113_540, "Tulsa"),
    ("Murfreesboro", "TN", 35.8456, -86.3903, 152_769, "Rutherford"),
    ("Cambridge", "MA", 42.3736, -71.1097, 118_403, "Middlesex"),
    ("Evansville", "IN", 37.9755, -87.5329, 116_830, "Vanderburgh"),
];

//! Idioms shipped with the application: `(id, english, vietnamese)`.

pub(crate) const BUNDLED_IDIOMS: &[(u32, &str, &str)] = &[
    (1, "kick the bucket", "chết, qua đời"),
    (2, "break the ice", "phá vỡ sự ngại ngùng ban đầu"),
    (3, "piece of cake", "dễ như ăn bánh"),
    (4, "hit the nail on the head", "nói trúng vấn đề"),
    (5, "let the cat out of the bag", "để lộ bí mật"),
    (6, "once in a blue moon", "năm thì mười họa, rất hiếm khi"),
    (7, "under the weather", "cảm thấy không khỏe"),
    (8, "cost an arm and a leg", "rất đắt đỏ"),
    (9, "bite the bullet", "cắn răng chịu đựng"),
    (10, "break a leg", "chúc may mắn"),
    (11, "call it a day", "nghỉ tay, kết thúc công việc trong ngày"),
    (12, "cut corners", "làm ẩu, làm tắt"),
    (13, "get out of hand", "vượt khỏi tầm kiểm soát"),
    (14, "hang in there", "cố lên, đừng bỏ cuộc"),
    (15, "hit the sack", "đi ngủ"),
    (16, "miss the boat", "lỡ mất cơ hội"),
    (17, "no pain, no gain", "có công mài sắt, có ngày nên kim"),
    (18, "on the ball", "nhanh nhạy, nắm bắt tình hình tốt"),
    (19, "pull someone's leg", "trêu chọc ai đó"),
    (20, "so far, so good", "đến giờ mọi việc vẫn ổn"),
    (21, "speak of the devil", "vừa nhắc Tào Tháo, Tào Tháo đến"),
    (22, "the best of both worlds", "vẹn cả đôi đường"),
    (23, "time flies when you're having fun", "vui quá quên cả thời gian"),
    (24, "to make matters worse", "tệ hơn nữa là"),
    (25, "under pressure", "chịu áp lực"),
    (26, "we'll cross that bridge when we come to it", "chuyện đến đâu hay đến đó"),
    (27, "wrap your head around something", "cố gắng hiểu một điều phức tạp"),
    (28, "you can say that again", "hoàn toàn đồng ý"),
    (29, "your guess is as good as mine", "tôi cũng không biết gì hơn bạn"),
    (30, "a blessing in disguise", "trong cái rủi có cái may"),
    (31, "a dime a dozen", "nhiều vô kể, rẻ như bèo"),
    (32, "beat around the bush", "nói vòng vo tam quốc"),
    (33, "better late than never", "muộn còn hơn không"),
    (34, "burn the midnight oil", "thức khuya làm việc"),
    (35, "actions speak louder than words", "việc làm hơn lời nói"),
    (36, "add insult to injury", "họa vô đơn chí"),
    (37, "barking up the wrong tree", "trách nhầm người, nhắm sai chỗ"),
    (38, "birds of a feather flock together", "ngưu tầm ngưu, mã tầm mã"),
    (39, "don't count your chickens before they hatch", "chưa đỗ ông nghè đã đe hàng tổng"),
    (40, "don't put all your eggs in one basket", "đừng bỏ hết trứng vào một giỏ"),
    (41, "every cloud has a silver lining", "sau cơn mưa trời lại sáng"),
    (42, "the ball is in your court", "quyền quyết định nằm trong tay bạn"),
    (43, "the early bird catches the worm", "trâu chậm uống nước đục"),
    (44, "when pigs fly", "còn lâu mới có chuyện đó"),
    (45, "when in Rome, do as the Romans do", "nhập gia tùy tục"),
    (46, "kill two birds with one stone", "một công đôi việc"),
    (47, "it's raining cats and dogs", "mưa như trút nước"),
    (48, "go the extra mile", "cố gắng hơn mức cần thiết"),
    (49, "get your act together", "chấn chỉnh lại bản thân"),
    (50, "give someone the benefit of the doubt", "tạm tin ai đó dù còn nghi ngờ"),
    (51, "a taste of your own medicine", "gậy ông đập lưng ông"),
    (52, "easier said than done", "nói thì dễ, làm mới khó"),
    (53, "it takes two to tango", "một bàn tay không vỗ nên kêu"),
    (54, "spill the beans", "tiết lộ bí mật"),
    (55, "the last straw", "giọt nước tràn ly"),
    (56, "out of the blue", "bất ngờ, đột ngột"),
    (57, "in the same boat", "cùng hội cùng thuyền"),
    (58, "jump on the bandwagon", "chạy theo số đông"),
    (59, "keep an eye on", "để mắt tới, trông chừng"),
    (60, "look before you leap", "cẩn tắc vô áy náy"),
    (61, "on cloud nine", "vui như lên chín tầng mây"),
    (62, "once bitten, twice shy", "chim phải đạn sợ cành cong"),
    (63, "practice makes perfect", "trăm hay không bằng tay quen"),
    (64, "see eye to eye", "đồng quan điểm"),
    (65, "sit on the fence", "đứng giữa, không theo phe nào"),
    (66, "steal someone's thunder", "cướp công của người khác"),
    (67, "take it with a grain of salt", "nghe nửa tin nửa ngờ"),
    (68, "through thick and thin", "dù sướng hay khổ, có nhau"),
    (69, "throw in the towel", "bỏ cuộc, chịu thua"),
    (70, "up in the air", "chưa được quyết định"),
    (71, "water under the bridge", "chuyện đã qua thì cho qua"),
    (72, "go for it", "cứ mạnh dạn làm đi"),
    (73, "a penny for your thoughts", "bạn đang nghĩ gì vậy?"),
    (74, "Rome wasn't built in a day", "thành công không đến trong một sớm một chiều"),
    (75, "the pot calling the kettle black", "chó chê mèo lắm lông"),
    (76, "a picture is worth a thousand words", "trăm nghe không bằng một thấy"),
    (77, "all ears", "lắng nghe chăm chú"),
    (78, "the elephant in the room", "vấn đề hiển nhiên mà ai cũng né tránh"),
    (79, "face the music", "đối mặt với hậu quả"),
    (80, "jump the gun", "hấp tấp, làm quá sớm"),
    (81, "a storm in a teacup", "chuyện bé xé ra to"),
    (82, "a fish out of water", "lạc lõng như cá mắc cạn"),
    (83, "as cool as a cucumber", "bình tĩnh như không"),
    (84, "hit the road", "lên đường"),
    (85, "on thin ice", "ở thế nguy hiểm, như đi trên băng mỏng"),
    (86, "the tip of the iceberg", "phần nổi của tảng băng chìm"),
    (87, "well begun is half done", "đầu xuôi đuôi lọt"),
    (88, "haste makes waste", "dục tốc bất đạt"),
    (89, "like father, like son", "cha nào con nấy"),
    (90, "a friend in need is a friend indeed", "hoạn nạn mới biết bạn hiền"),
];
